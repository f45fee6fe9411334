//! Test cases for outcome.

#![allow(clippy::bool_assert_comparison)]

pub(crate) mod prelude {
    pub(crate) use crate::describe::{describe, INLINE_LIMIT};
    pub(crate) use crate::tests::{expect_unwrap_error, Recorder};
    pub(crate) use crate::{
        attempt, attempt_async, failure, success, Outcome, Panicked, UnwrapError, UnwrapKind,
    };
    pub(crate) use futures_executor::block_on;
    pub(crate) use std::convert::Infallible;
    pub(crate) use std::panic::{self, AssertUnwindSafe};
}

use std::cell::Cell;
use std::panic::{self, UnwindSafe};

use crate::UnwrapError;

/// Run `f` which is expected to panic with an [`UnwrapError`], and return the
/// error.
pub(crate) fn expect_unwrap_error<F, T>(f: F) -> UnwrapError
where
    F: FnOnce() -> T + UnwindSafe,
{
    let payload = match panic::catch_unwind(f) {
        Ok(..) => panic!("expected an unwrap error, but the call returned"),
        Err(payload) => payload,
    };

    match payload.downcast::<UnwrapError>() {
        Ok(error) => *error,
        Err(..) => panic!("expected the panic payload to be an unwrap error"),
    }
}

/// Counts how many times a handler was called.
#[derive(Default)]
pub(crate) struct Recorder {
    calls: Cell<usize>,
}

impl Recorder {
    /// Record a call, passing through the value.
    pub(crate) fn record<T>(&self, value: T) -> T {
        self.calls.set(self.calls.get() + 1);
        value
    }

    /// The number of recorded calls.
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

macro_rules! prelude {
    () => {
        #[allow(unused_imports)]
        use crate::tests::prelude::*;
    };
}

mod describe;
#[cfg(feature = "serde")]
mod serde;
