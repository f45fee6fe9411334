//! A success/failure container for Rust.
//!
//! [`Outcome<T, E>`] carries either a successful value or a typed failure
//! reason. Functions return it instead of panicking or handing out sentinel
//! values, and callers compose it through combinators instead of branching at
//! every call site.
//!
//! ```
//! use outcome::{failure, success, Outcome};
//!
//! fn parse(input: &str) -> Outcome<u32, String> {
//!     match input.parse() {
//!         Ok(value) => success(value),
//!         Err(..) => failure(format!("not a number: {input}")),
//!     }
//! }
//!
//! let doubled = parse("21").map(|v| v * 2);
//! assert_eq!(doubled, success(42));
//!
//! let message = parse("x").fold(|v| format!("S:{v}"), |e| format!("F:{e}"));
//! assert_eq!(message, "F:not a number: x");
//! ```
//!
//! There are two error channels which are never conflated:
//!
//! * Domain failures are data, the [`Failure`] variant. They are returned and
//!   propagated by the combinators, never raised.
//! * Misuse of an outcome, forcibly extracting the variant which is not
//!   present, raises an [`UnwrapError`] through [`std::panic::panic_any`]. The
//!   `try_*` unwrap family returns the same error as a plain [`Result`]
//!   instead. The first raise installs a panic hook through
//!   [`install_panic_hook`] so that an uncaught [`UnwrapError`] is reported by
//!   its message.
//!
//! Code that panics can be brought into the fold with [`attempt`] and
//! [`attempt_async`].
//!
//! ## Features
//!
//! * `serde` - [`Serialize`] and [`Deserialize`] for [`Outcome`], and
//!   [`describe_json`].
//!
//! [`Failure`]: Outcome::Failure
//! [`Serialize`]: https://docs.rs/serde/1/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/1/serde/trait.Deserialize.html

#![deny(missing_docs)]

#[macro_use]
mod macros;

mod attempt;
pub mod describe;
mod outcome;
#[cfg(feature = "serde")]
mod serde;
mod unwrap_error;

#[cfg(test)]
mod tests;

pub use self::attempt::{attempt, attempt_async, AttemptFuture, Panicked};
#[cfg(feature = "serde")]
pub use self::describe::describe_json;
pub use self::describe::describe;
pub use self::outcome::{
    failure, success, try_outcome, IntoIter, Iter, IterMut, Outcome, TryFromOutcome,
};
pub use self::unwrap_error::{install_panic_hook, UnwrapError, UnwrapKind};

pub use std::panic::AssertUnwindSafe;
