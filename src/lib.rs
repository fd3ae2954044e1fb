//! # errm
//!
//! A small algebra for chaining fallible steps.
//!
//! An [`Outcome`] holds either a value or a failure. Combinators sequence
//! outcomes ([`bind`], [`compose`], [`join`], [`raise`]), recover from failures
//! ([`or_else`], [`from_value`], [`build`]) and adapt ordinary functions into
//! steps ([`wrap`], [`ensure`], [`transform`], [`with_context`]). Failures from
//! wrapped functions can be [`Decorated`] with the step's name and input while
//! the original error stays reachable.
//!
//! ## Quick Example
//!
//! ```rust
//! use errm::prelude::*;
//!
//! fn multiply_two(n: i32) -> Result<i32, String> {
//!     Ok(n * 2)
//! }
//!
//! fn add_three(n: i32) -> Result<i32, String> {
//!     if n > 100 {
//!         Err("too large".to_string())
//!     } else {
//!         Ok(n + 3)
//!     }
//! }
//!
//! let (value, err) = bind(bind(succeed(3), wrap(multiply_two)), wrap(add_three)).unpack();
//! assert_eq!(value, 9);
//! assert!(err.is_none());
//!
//! let (value, err) = bind(bind(succeed(60), wrap(multiply_two)), wrap(add_three)).unpack();
//! assert_eq!(value, 0);
//! assert_eq!(err.unwrap().inner(), "too large");
//!
//! let (value, _) = or_else(transform(succeed(60), add_three), from_value(-1)).unpack();
//! assert_eq!(value, 63);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when wrapped steps fail
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`Decorated`]
//! - `proptest`: `Arbitrary` for [`Outcome`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinators;
pub mod decorate;
pub mod outcome;
pub mod testing;

// Re-exports
pub use combinators::{
    and_then, bind, build, build_lazy, compose, ensure, from_value, join, or_else, raise,
    transform, with_context, with_default, wrap, wrap_named, wrap_with,
};
pub use decorate::{disable_decoration, enable_decoration, Decorated, Decoration};
pub use outcome::{fail, succeed, Outcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{
        and_then, bind, build, build_lazy, compose, ensure, from_value, join, or_else, raise,
        transform, with_context, with_default, wrap, wrap_named, wrap_with,
    };
    pub use crate::decorate::{Decorated, Decoration};
    pub use crate::outcome::{fail, succeed, Outcome};
}
