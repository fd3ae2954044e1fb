//! Error decoration
//!
//! When a step adapted with [`wrap`](crate::combinators::wrap) fails, its error
//! can be annotated with the step's name and the input it was called with.
//! The annotated error is a [`Decorated<E>`]: it displays as
//! `"<name>(<input>): <error>"` while keeping the original error reachable
//! through [`Decorated::inner`] and [`std::error::Error::source`].
//!
//! Whether decoration happens is controlled by a [`Decoration`] value. Adapters
//! built with [`wrap_with`](crate::combinators::wrap_with) take it explicitly;
//! [`wrap`](crate::combinators::wrap) and
//! [`wrap_named`](crate::combinators::wrap_named) read the process-wide default
//! each time they run. The default starts enabled and is meant to be set once
//! at startup with [`enable_decoration`] / [`disable_decoration`].
//!
//! # Examples
//!
//! ```
//! use errm::{wrap_with, Decoration};
//!
//! let parse = wrap_with(Decoration::Enabled, "parse", |s: &str| s.parse::<i32>());
//! let (_, err) = parse("x1").unpack();
//! let err = err.unwrap();
//!
//! assert!(err.is_decorated());
//! assert!(err.to_string().starts_with("parse(\"x1\"): "));
//! assert_eq!(err.inner(), &"x1".parse::<i32>().unwrap_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static DECORATE_ERRORS: AtomicBool = AtomicBool::new(true);

/// Turn on decoration for adapters that follow the process-wide default.
pub fn enable_decoration() {
    DECORATE_ERRORS.store(true, Ordering::Relaxed);
}

/// Turn off decoration for adapters that follow the process-wide default.
///
/// Errors produced afterwards by [`wrap`](crate::combinators::wrap) display
/// exactly like the underlying error.
pub fn disable_decoration() {
    DECORATE_ERRORS.store(false, Ordering::Relaxed);
}

/// Whether failures are annotated with the failing step and its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Decoration {
    /// Annotate failures
    #[default]
    Enabled,
    /// Pass failures through untouched
    Disabled,
}

impl Decoration {
    /// The process-wide default, as last set by [`enable_decoration`] or
    /// [`disable_decoration`].
    pub fn current() -> Self {
        if DECORATE_ERRORS.load(Ordering::Relaxed) {
            Decoration::Enabled
        } else {
            Decoration::Disabled
        }
    }

    /// Returns `true` for [`Decoration::Enabled`].
    #[inline]
    pub fn is_enabled(self) -> bool {
        matches!(self, Decoration::Enabled)
    }
}

impl From<bool> for Decoration {
    fn from(enabled: bool) -> Self {
        if enabled {
            Decoration::Enabled
        } else {
            Decoration::Disabled
        }
    }
}

/// An error that may carry the name and input of the step that produced it.
///
/// # Examples
///
/// ```
/// use errm::Decorated;
///
/// let err = Decorated::new("boom", "double", "3");
/// assert_eq!(err.to_string(), "double(3): boom");
/// assert_eq!(err.inner(), &"boom");
///
/// let plain = Decorated::plain("boom");
/// assert_eq!(plain.to_string(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decorated<E> {
    error: E,
    step: Option<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Step {
    label: String,
    input: String,
}

impl<E> Decorated<E> {
    /// Wrap an error with the step label and rendered input.
    pub fn new(error: E, label: impl Into<String>, input: impl Into<String>) -> Self {
        Decorated {
            error,
            step: Some(Step {
                label: label.into(),
                input: input.into(),
            }),
        }
    }

    /// Wrap an error without annotation.
    pub fn plain(error: E) -> Self {
        Decorated { error, step: None }
    }

    /// Returns `true` if the error carries step information.
    pub fn is_decorated(&self) -> bool {
        self.step.is_some()
    }

    /// Label of the failing step, if decorated.
    pub fn label(&self) -> Option<&str> {
        self.step.as_ref().map(|step| step.label.as_str())
    }

    /// `Debug` rendering of the failing step's input, if decorated.
    pub fn input(&self) -> Option<&str> {
        self.step.as_ref().map(|step| step.input.as_str())
    }

    /// Get the underlying error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Consume and return the underlying error, discarding the annotation.
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E> From<E> for Decorated<E> {
    fn from(error: E) -> Self {
        Decorated::plain(error)
    }
}

impl<E: fmt::Display> fmt::Display for Decorated<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.step {
            Some(step) => write!(f, "{}({}): {}", step.label, step.input, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

impl<E: StdError + 'static> StdError for Decorated<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
