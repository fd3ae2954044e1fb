use std::cell::Cell;
use std::error::Error;

use errm::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum CalcError {
    Multiply,
    Add,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::Multiply => write!(f, "multiply failed"),
            CalcError::Add => write!(f, "add failed"),
        }
    }
}

impl std::error::Error for CalcError {}

struct Steps {
    fail_multiply: bool,
    fail_add: bool,
    add_calls: Cell<usize>,
}

impl Steps {
    fn new(fail_multiply: bool, fail_add: bool) -> Self {
        Steps {
            fail_multiply,
            fail_add,
            add_calls: Cell::new(0),
        }
    }

    fn multiply_two(&self, n: i32) -> Result<i32, CalcError> {
        if self.fail_multiply {
            Err(CalcError::Multiply)
        } else {
            Ok(n * 2)
        }
    }

    fn add_three(&self, n: i32) -> Result<i32, CalcError> {
        self.add_calls.set(self.add_calls.get() + 1);
        if self.fail_add {
            Err(CalcError::Add)
        } else {
            Ok(n + 3)
        }
    }
}

fn assert_multiply_failure(value: i32, error: Option<Decorated<CalcError>>) {
    assert_eq!(value, 0);
    let error = error.expect("expected the multiply step to fail");
    assert_eq!(error.inner(), &CalcError::Multiply);

    let source = error.source().expect("decorated error has a source");
    assert_eq!(source.downcast_ref::<CalcError>(), Some(&CalcError::Multiply));
}

#[test]
fn test_bind_style_success_chaining() {
    let steps = Steps::new(false, false);

    let (value, error) = bind(
        bind(succeed(3), wrap(|n| steps.multiply_two(n))),
        wrap(|n| steps.add_three(n)),
    )
    .unpack();

    assert!(error.is_none());
    assert_eq!(value, 9);
}

#[test]
fn test_bind_style_abort_on_error() {
    let steps = Steps::new(true, true);

    let (value, error) = bind(
        bind(succeed(3), wrap(|n| steps.multiply_two(n))),
        wrap(|n| steps.add_three(n)),
    )
    .unpack();

    assert_multiply_failure(value, error);
    assert_eq!(steps.add_calls.get(), 0);
}

#[test]
fn test_compose_style_success_chaining() {
    let steps = Steps::new(false, false);

    let pipeline = compose(
        wrap(|n| steps.multiply_two(n)),
        wrap(|n| steps.add_three(n)),
    );
    let (value, error) = pipeline(3).unpack();

    assert!(error.is_none());
    assert_eq!(value, 9);
}

#[test]
fn test_compose_style_abort_on_error() {
    let steps = Steps::new(true, false);

    let pipeline = compose(
        wrap(|n| steps.multiply_two(n)),
        wrap(|n| steps.add_three(n)),
    );
    let (value, error) = pipeline(3).unpack();

    assert_multiply_failure(value, error);
    assert_eq!(steps.add_calls.get(), 0);
}

#[test]
fn test_join_style_success_chaining() {
    let steps = Steps::new(false, false);

    let lifted = raise(wrap(|n| steps.add_three(n)));
    let (value, error) = join(lifted(wrap(|n| steps.multiply_two(n))(3))).unpack();

    assert!(error.is_none());
    assert_eq!(value, 9);
}

#[test]
fn test_join_style_abort_on_error() {
    let steps = Steps::new(true, false);

    let lifted = raise(wrap(|n| steps.add_three(n)));
    let (value, error) = join(lifted(wrap(|n| steps.multiply_two(n))(3))).unpack();

    assert_multiply_failure(value, error);
    assert_eq!(steps.add_calls.get(), 0);
}

#[test]
fn test_second_step_failure_is_reported() {
    let steps = Steps::new(false, true);

    let (value, error) = transform(transform(succeed(3), |n| steps.multiply_two(n)), |n| {
        steps.add_three(n)
    })
    .unpack();

    assert_eq!(value, 0);
    let error = error.expect("expected the add step to fail");
    assert_eq!(error.inner(), &CalcError::Add);
    assert_eq!(error.input(), Some("6"));
    assert_eq!(steps.add_calls.get(), 1);
}

#[test]
fn test_longer_chain_ends_with_total_function() {
    let (value, error) = bind(
        bind(
            bind(succeed(3), wrap(|n: i32| Ok::<_, CalcError>(n * 2))),
            wrap(|n: i32| Ok::<_, CalcError>(n + 3)),
        ),
        ensure(|n: i32| n.to_string()),
    )
    .unpack();

    assert!(error.is_none());
    assert_eq!(value, "9");
}

#[test]
fn test_default_from_value() {
    let (value, error) = with_default(
        bind(
            succeed(3),
            wrap(|_: i32| Err::<i32, _>(CalcError::Multiply)),
        ),
        from_value(-1),
    )
    .unpack();

    assert!(error.is_none());
    assert_eq!(value, -1);
}

#[test]
fn test_default_from_builder() {
    let (value, error) = with_default(
        bind(
            succeed(3),
            wrap(|_: i32| Err::<i32, _>(CalcError::Multiply)),
        ),
        build(|| Ok(-1)),
    )
    .unpack();

    assert!(error.is_none());
    assert_eq!(value, -1);
}

#[test]
fn test_context_bound_steps_in_pipeline() {
    struct Pricing {
        tax_percent: u32,
    }

    fn with_tax(pricing: &Pricing, cents: u32) -> Result<u32, String> {
        cents
            .checked_mul(100 + pricing.tax_percent)
            .map(|total| total / 100)
            .ok_or_else(|| "price overflow".to_string())
    }

    let taxed = wrap_named(
        "with_tax",
        with_context(Pricing { tax_percent: 20 }, with_tax),
    );

    assert_eq!(bind(succeed(1000), &taxed).unpack(), (1200, None));

    let (value, error) = bind(succeed(u32::MAX), &taxed).unpack();
    assert_eq!(value, 0);
    let error = error.expect("overflow should fail");
    assert_eq!(error.inner(), "price overflow");
    assert_eq!(
        error.to_string(),
        format!("with_tax({}): price overflow", u32::MAX)
    );
}
