//! Free-function combinators over [`Outcome`]
//!
//! Two families live here:
//!
//! - sequencing: [`bind`], [`and_then`], [`or_else`], [`compose`], [`join`]
//!   and [`raise`] chain outcomes together and propagate the first failure;
//! - adapters: [`wrap`], [`ensure`], [`transform`], [`with_context`],
//!   [`from_value`] and [`build`] turn ordinary functions into steps the
//!   sequencing family accepts.
//!
//! # Examples
//!
//! ```
//! use errm::prelude::*;
//!
//! fn multiply_two(n: i32) -> Result<i32, String> {
//!     Ok(n * 2)
//! }
//!
//! fn add_three(n: i32) -> Result<i32, String> {
//!     Ok(n + 3)
//! }
//!
//! let r = bind(bind(succeed(3), wrap(multiply_two)), wrap(add_three));
//! assert_eq!(r.unpack(), (9, None));
//!
//! let pipeline = compose(wrap(multiply_two), wrap(add_three));
//! assert_eq!(pipeline(3).unpack(), (9, None));
//! ```

use std::any::type_name;
use std::fmt;

use crate::decorate::{Decorated, Decoration};
use crate::outcome::Outcome;

// ========== Sequencing ==========

/// Run `step` on the value of a successful outcome.
///
/// A failure is returned as is and `step` is not called.
pub fn bind<T, U, E, F>(outcome: Outcome<T, E>, step: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    outcome.bind(step)
}

/// Alias for [`bind`].
#[inline]
pub fn and_then<T, U, E, F>(outcome: Outcome<T, E>, step: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    outcome.bind(step)
}

/// Replace a failure with whatever `fallback` produces.
///
/// A success is returned unchanged and `fallback` is not called.
pub fn or_else<T, E, F>(outcome: Outcome<T, E>, fallback: F) -> Outcome<T, E>
where
    F: FnOnce() -> Outcome<T, E>,
{
    outcome.or_else(fallback)
}

/// Alias for [`or_else`].
#[inline]
pub fn with_default<T, E, F>(outcome: Outcome<T, E>, fallback: F) -> Outcome<T, E>
where
    F: FnOnce() -> Outcome<T, E>,
{
    outcome.or_else(fallback)
}

/// Kleisli composition of two fallible steps.
///
/// The returned function applies `f` and, only if it succeeded, `g`.
/// `compose(f, g)(t)` is the same as `bind(f(t), g)`.
///
/// # Example
///
/// ```
/// use errm::{compose, Outcome};
///
/// let parse = |s: &str| match s.parse::<i32>() {
///     Ok(n) => Outcome::success(n),
///     Err(_) => Outcome::failure("not a number"),
/// };
/// let positive = |n: i32| {
///     if n > 0 { Outcome::success(n) } else { Outcome::failure("not positive") }
/// };
///
/// let check = compose(parse, positive);
/// assert_eq!(check("4"), Outcome::Success(4));
/// assert_eq!(check("-4"), Outcome::Failure("not positive"));
/// assert_eq!(check("x"), Outcome::Failure("not a number"));
/// ```
pub fn compose<T, U, V, E, F, G>(f: F, g: G) -> impl Fn(T) -> Outcome<V, E>
where
    F: Fn(T) -> Outcome<U, E>,
    G: Fn(U) -> Outcome<V, E>,
{
    move |t| f(t).bind(&g)
}

/// Flatten one level of nested outcomes.
///
/// An outer failure is propagated; otherwise the inner outcome is returned
/// verbatim, whether it succeeded or not.
pub fn join<T, E>(nested: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    nested.join()
}

/// Lift a step so it runs inside an existing outcome, keeping the nesting.
///
/// The outer layer of the result reports whether the input was a failure;
/// the inner layer reports whether `step` failed. `join(raise(f)(x))` is the
/// same as `bind(x, f)`.
///
/// # Example
///
/// ```
/// use errm::{join, raise, Outcome};
///
/// let halve = |n: i32| {
///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd") }
/// };
/// let lifted = raise(halve);
///
/// assert_eq!(lifted(Outcome::success(3)), Outcome::Success(Outcome::Failure("odd")));
/// assert_eq!(lifted(Outcome::failure("upstream")), Outcome::Failure("upstream"));
/// assert_eq!(join(lifted(Outcome::success(8))), Outcome::Success(4));
/// ```
pub fn raise<T, U, E, F>(step: F) -> impl Fn(Outcome<T, E>) -> Outcome<Outcome<U, E>, E>
where
    F: Fn(T) -> Outcome<U, E>,
{
    move |outcome| outcome.map(&step)
}

// ========== Adapters ==========

/// Adapt a plain fallible function into a step.
///
/// `Ok` becomes a success. `Err` becomes a failure wrapped in [`Decorated`];
/// if the process-wide default is [`Decoration::Enabled`] when the step runs,
/// the error is annotated with the function's type name and the `Debug`
/// rendering of its input. Named functions resolve to their path; closures
/// resolve to a synthetic `{{closure}}` path. Use [`wrap_named`] for a stable
/// label.
///
/// The step takes its input by value, so while decoration is enabled the
/// input is rendered with `Debug` before every call, successful or not, and
/// the flag is read at that point. On hot paths with costly `Debug` impls use
/// [`wrap_with`] with [`Decoration::Disabled`].
///
/// # Example
///
/// ```
/// use errm::wrap;
///
/// fn checked_double(n: u8) -> Result<u8, &'static str> {
///     n.checked_mul(2).ok_or("overflow")
/// }
///
/// let step = wrap(checked_double);
/// assert_eq!(step(4).unpack(), (8, None));
///
/// let (_, err) = step(200).unpack();
/// let err = err.unwrap();
/// assert_eq!(err.inner(), &"overflow");
/// assert!(err.to_string().contains("checked_double(200): overflow"));
/// ```
pub fn wrap<T, U, E, F>(step: F) -> impl Fn(T) -> Outcome<U, Decorated<E>>
where
    T: fmt::Debug,
    F: Fn(T) -> Result<U, E>,
{
    let label = type_name::<F>();
    move |input| run_step(Decoration::current(), label, &step, input)
}

/// Like [`wrap`], with a caller-supplied label instead of the type name.
pub fn wrap_named<T, U, E, F>(
    label: impl Into<String>,
    step: F,
) -> impl Fn(T) -> Outcome<U, Decorated<E>>
where
    T: fmt::Debug,
    F: Fn(T) -> Result<U, E>,
{
    let label = label.into();
    move |input| run_step(Decoration::current(), &label, &step, input)
}

/// Like [`wrap_named`], with an explicit [`Decoration`] choice.
///
/// The process-wide default is never consulted.
pub fn wrap_with<T, U, E, F>(
    decoration: Decoration,
    label: impl Into<String>,
    step: F,
) -> impl Fn(T) -> Outcome<U, Decorated<E>>
where
    T: fmt::Debug,
    F: Fn(T) -> Result<U, E>,
{
    let label = label.into();
    move |input| run_step(decoration, &label, &step, input)
}

// The input is rendered before the call because `step` takes it by value.
fn run_step<T, U, E, F>(
    decoration: Decoration,
    label: &str,
    step: &F,
    input: T,
) -> Outcome<U, Decorated<E>>
where
    T: fmt::Debug,
    F: Fn(T) -> Result<U, E>,
{
    let rendered = decoration.is_enabled().then(|| format!("{:?}", input));

    match step(input) {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(step = label, decorated = rendered.is_some(), "step failed");

            let error = match rendered {
                Some(input) => Decorated::new(error, label, input),
                None => Decorated::plain(error),
            };
            Outcome::Failure(error)
        }
    }
}

/// Adapt a function that cannot fail into a step. The result always succeeds.
///
/// # Example
///
/// ```
/// use errm::{bind, ensure, succeed, Outcome};
///
/// let r: Outcome<String, ()> = bind(succeed(9), ensure(|n: i32| n.to_string()));
/// assert_eq!(r, Outcome::Success("9".to_string()));
/// ```
pub fn ensure<T, U, E, F>(step: F) -> impl Fn(T) -> Outcome<U, E>
where
    F: Fn(T) -> U,
{
    move |input| Outcome::Success(step(input))
}

/// Bind a plain fallible function: `bind(outcome, wrap(step))`.
pub fn transform<T, U, E, F>(
    outcome: Outcome<T, Decorated<E>>,
    step: F,
) -> Outcome<U, Decorated<E>>
where
    T: fmt::Debug,
    F: Fn(T) -> Result<U, E>,
{
    outcome.bind(wrap(step))
}

/// Fix the leading context argument of a two-argument fallible function.
///
/// The result takes one argument and can be passed to [`wrap`] or
/// [`transform`].
///
/// # Example
///
/// ```
/// use errm::{transform, with_context, Decorated, Outcome};
///
/// struct Limits {
///     max: u32,
/// }
///
/// fn within(limits: &Limits, n: u32) -> Result<u32, String> {
///     if n <= limits.max {
///         Ok(n)
///     } else {
///         Err(format!("{} exceeds {}", n, limits.max))
///     }
/// }
///
/// let check = with_context(Limits { max: 10 }, within);
/// let r = transform(Outcome::<u32, Decorated<String>>::success(12), check);
/// assert_eq!(r.unpack().1.unwrap().inner(), "12 exceeds 10");
/// ```
pub fn with_context<C, T, U, E, F>(context: C, step: F) -> impl Fn(T) -> Result<U, E>
where
    F: Fn(&C, T) -> Result<U, E>,
{
    move |input| step(&context, input)
}

/// A fallback that always succeeds with `value`.
///
/// Meant as the argument to [`or_else`].
pub fn from_value<T, E>(value: T) -> impl Fn() -> Outcome<T, E>
where
    T: Clone,
{
    move || Outcome::Success(value.clone())
}

/// Run `step` now and return a fallback that replays its outcome.
///
/// `step` is evaluated exactly once, when `build` is called, whether or not
/// the returned function is ever invoked. An `Err` from `step` is replayed as
/// a failure. Use [`build_lazy`] to evaluate on every call instead.
///
/// # Example
///
/// ```
/// use errm::{build, or_else, Outcome};
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let fallback = build(|| {
///     calls.set(calls.get() + 1);
///     Ok::<_, &str>(-1)
/// });
/// assert_eq!(calls.get(), 1);
///
/// let r = or_else(Outcome::failure("boom"), &fallback);
/// assert_eq!(r.unpack(), (-1, None));
/// assert_eq!(fallback(), Outcome::Success(-1));
/// assert_eq!(calls.get(), 1);
/// ```
pub fn build<T, E, F>(step: F) -> impl Fn() -> Outcome<T, E>
where
    T: Clone,
    E: Clone,
    F: FnOnce() -> Result<T, E>,
{
    let outcome = Outcome::from_result(step());

    #[cfg(feature = "tracing")]
    tracing::trace!(success = outcome.is_success(), "fallback built");

    move || outcome.clone()
}

/// A fallback that runs `step` each time it is called.
pub fn build_lazy<T, E, F>(step: F) -> impl Fn() -> Outcome<T, E>
where
    F: Fn() -> Result<T, E>,
{
    move || Outcome::from_result(step())
}
