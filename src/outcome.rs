//! The `Outcome` container
//!
//! `Outcome<T, E>` holds either a successful value or a failure. Every
//! combinator in this crate consumes an `Outcome` and produces a new one; none
//! of them mutate in place. The container is inspected at the boundary with
//! [`Outcome::unpack`].
//!
//! # Examples
//!
//! ```
//! use errm::Outcome;
//!
//! let ok = Outcome::<_, &str>::success(3);
//! let doubled = ok.and_then(|n| Outcome::success(n * 2));
//! assert_eq!(doubled.unpack(), (6, None));
//!
//! let bad = Outcome::<i32, _>::failure("boom");
//! assert_eq!(bad.unpack(), (0, Some("boom")));
//! ```

use crate::combinators::wrap;
use crate::decorate::Decorated;
use std::fmt;

/// Either a successful value or a failure.
///
/// Exactly one of the two is present. Unlike `Result`, an `Outcome` is
/// unpacked into a `(value, error)` pair, with the value defaulted when the
/// outcome is a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A successful value
    Success(T),
    /// A failure
    Failure(E),
}

/// Construct a successful outcome.
///
/// # Example
///
/// ```
/// use errm::{succeed, Outcome};
///
/// let r: Outcome<i32, String> = succeed(3);
/// assert!(r.is_success());
/// ```
#[inline]
pub fn succeed<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Construct a failed outcome.
///
/// # Example
///
/// ```
/// use errm::{fail, Outcome};
///
/// let r: Outcome<i32, &str> = fail("boom");
/// assert!(r.is_failure());
/// ```
#[inline]
pub fn fail<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Create a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Convert a standard `Result` into an `Outcome`.
    ///
    /// # Example
    ///
    /// ```
    /// use errm::Outcome;
    ///
    /// let r: Result<i32, &str> = Ok(1);
    /// assert_eq!(Outcome::from_result(r), Outcome::Success(1));
    /// ```
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Convert into a standard `Result`, so `?` can be used at the boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use errm::Outcome;
    ///
    /// let r = Outcome::<i32, &str>::failure("boom");
    /// assert_eq!(r.into_result(), Err("boom"));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The error, if any.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Split into a `(value, error)` pair.
    ///
    /// A success yields `(value, None)`. A failure yields the default value of
    /// `T` together with the stored error. No error is ever synthesised.
    ///
    /// # Example
    ///
    /// ```
    /// use errm::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::success(9).unpack(), (9, None));
    /// assert_eq!(
    ///     Outcome::<String, _>::failure("boom").unpack(),
    ///     (String::new(), Some("boom"))
    /// );
    /// ```
    pub fn unpack(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Outcome::Success(value) => (value, None),
            Outcome::Failure(error) => (T::default(), Some(error)),
        }
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error.
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Sequence a fallible step after this outcome.
    ///
    /// A failure is propagated without calling `step`. A success is handed to
    /// `step` and its outcome returned directly.
    ///
    /// # Example
    ///
    /// ```
    /// use errm::Outcome;
    ///
    /// let r = Outcome::<_, &str>::success(3)
    ///     .bind(|n| Outcome::success(n * 2))
    ///     .bind(|n| Outcome::success(n + 3));
    /// assert_eq!(r, Outcome::Success(9));
    /// ```
    pub fn bind<U, F>(self, step: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => step(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`Outcome::bind`].
    #[inline]
    pub fn and_then<U, F>(self, step: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.bind(step)
    }

    /// Recover from a failure.
    ///
    /// On failure the error is discarded and `fallback` decides the result.
    /// The fallback learns nothing about the original error. On success the
    /// fallback is never called.
    ///
    /// # Example
    ///
    /// ```
    /// use errm::{from_value, Outcome};
    ///
    /// let r = Outcome::<i32, &str>::failure("boom").or_else(from_value(-1));
    /// assert_eq!(r.unpack(), (-1, None));
    /// ```
    pub fn or_else<F>(self, fallback: F) -> Outcome<T, E>
    where
        F: FnOnce() -> Outcome<T, E>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => fallback(),
        }
    }

    /// Alias for [`Outcome::or_else`].
    #[inline]
    pub fn with_default<F>(self, fallback: F) -> Outcome<T, E>
    where
        F: FnOnce() -> Outcome<T, E>,
    {
        self.or_else(fallback)
    }
}

impl<T, E> Outcome<T, Decorated<E>> {
    /// Bind a plain fallible function, adapting it with [`wrap`] first.
    ///
    /// # Example
    ///
    /// ```
    /// use errm::{Decorated, Outcome};
    ///
    /// let r = Outcome::<i32, Decorated<&str>>::success(4)
    ///     .transform(|n: i32| if n > 0 { Ok(n - 1) } else { Err("negative") });
    /// assert_eq!(r.unpack().0, 3);
    /// ```
    pub fn transform<U, F>(self, step: F) -> Outcome<U, Decorated<E>>
    where
        T: fmt::Debug,
        F: Fn(T) -> Result<U, E>,
    {
        self.bind(wrap(step))
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Flatten one level of nesting.
    ///
    /// An outer failure wins; otherwise the inner outcome is returned as is.
    pub fn join(self) -> Outcome<T, E> {
        match self {
            Outcome::Success(inner) => inner,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
