//! Testing utilities for code built on `Outcome`
//!
//! Assertion macros for outcomes, and an `Arbitrary` implementation for
//! property-based tests when the `proptest` feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use errm::{assert_failure, assert_failure_eq, assert_success, Outcome};
//!
//! let success = Outcome::<_, String>::success(42);
//! assert_success!(success);
//!
//! let failure = Outcome::<i32, _>::failure("boom");
//! assert_failure!(failure);
//! assert_failure_eq!(failure, "boom");
//! ```

/// Assert that an outcome succeeds.
///
/// Panics with the error if the outcome is a `Failure`. With a second
/// argument, also asserts the success value.
///
/// # Example
///
/// ```rust
/// use errm::{assert_success, Outcome};
///
/// assert_success!(Outcome::<_, String>::success(42));
/// assert_success!(Outcome::<_, String>::success(42), 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome fails.
///
/// Panics with the value if the outcome is a `Success`.
///
/// # Example
///
/// ```rust
/// use errm::{assert_failure, Outcome};
///
/// assert_failure!(Outcome::<i32, _>::failure("boom"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome fails with a specific error.
///
/// # Example
///
/// ```rust
/// use errm::{assert_failure_eq, Outcome};
///
/// assert_failure_eq!(Outcome::<i32, _>::failure("boom"), "boom");
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(crate::Outcome::success),
            any_with::<E>(e_params).prop_map(crate::Outcome::failure),
        ]
        .boxed()
    }
}
