use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, UnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project::pin_project;

use crate::outcome::Outcome;
use crate::unwrap_error::UnwrapError;

/// Run `f`, capturing a panic raised by it as a [`Failure`].
///
/// A normal return `v` produces `Success(v)`. A panic is never re-raised,
/// its payload is captured in [`Panicked`] instead. This includes an
/// [`UnwrapError`] raised by misusing an outcome, which can be told apart with
/// [`Panicked::is`] and sent on its way with [`Panicked::resume`].
///
/// Closures which capture mutable state are not [`UnwindSafe`]. Wrap them in
/// [`AssertUnwindSafe`] after checking that observing that state after a panic
/// is fine.
///
/// ```
/// use outcome::attempt;
///
/// assert_eq!(attempt(|| 40 + 2).success(), Some(42));
///
/// let failed = attempt(|| -> u32 { panic!("boom") });
/// assert_eq!(failed.unwrap_failure().message(), Some("boom"));
/// ```
///
/// [`Failure`]: Outcome::Failure
/// [`AssertUnwindSafe`]: std::panic::AssertUnwindSafe
#[tracing::instrument(skip_all)]
pub fn attempt<F, T>(f: F) -> Outcome<T, Panicked>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(Panicked::capture(payload)),
    }
}

/// Wrap `future`, capturing a panic raised while polling it as a
/// [`Failure`].
///
/// The returned future behaves like [`attempt`] does for closures. The future
/// is not polled until the returned one is.
///
/// Async blocks are usually not [`UnwindSafe`] since they hold on to the task
/// context across polls, so they need to be wrapped in [`AssertUnwindSafe`].
///
/// ```
/// use outcome::{attempt_async, AssertUnwindSafe};
///
/// # futures_executor::block_on(async {
/// let value = attempt_async(AssertUnwindSafe(async { 42 })).await;
/// assert_eq!(value.success(), Some(42));
/// # });
/// ```
///
/// [`Failure`]: Outcome::Failure
/// [`AssertUnwindSafe`]: std::panic::AssertUnwindSafe
pub fn attempt_async<F>(future: F) -> AttemptFuture<F>
where
    F: Future + UnwindSafe,
{
    AttemptFuture { future }
}

/// Future returned by [`attempt_async`].
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct AttemptFuture<F> {
    #[pin]
    future: F,
}

impl<F> Future for AttemptFuture<F>
where
    F: Future + UnwindSafe,
{
    type Output = Outcome<F::Output, Panicked>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let future = self.project().future;

        match panic::catch_unwind(panic::AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => Poll::Ready(Outcome::Success(value)),
            Err(payload) => Poll::Ready(Outcome::Failure(Panicked::capture(payload))),
        }
    }
}

impl<F> fmt::Debug for AttemptFuture<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptFuture").finish_non_exhaustive()
    }
}

/// The payload of a panic captured by [`attempt`] or [`attempt_async`].
pub struct Panicked {
    payload: Box<dyn Any + Send>,
}

impl Panicked {
    fn capture(payload: Box<dyn Any + Send>) -> Self {
        let this = Self { payload };

        tracing::debug!(
            reason = ?this.message(),
            misuse = this.is::<UnwrapError>(),
            "captured panic"
        );

        this
    }

    /// The panic message, if the panic was raised with a string or is an
    /// [`UnwrapError`].
    ///
    /// This is the case for `panic!` with a format string.
    pub fn message(&self) -> Option<&str> {
        if let Some(error) = self.payload.downcast_ref::<UnwrapError>() {
            return Some(error.message());
        }

        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(*message);
        }

        if let Some(message) = self.payload.downcast_ref::<String>() {
            return Some(message.as_str());
        }

        None
    }

    /// Test if the payload is of type `P`.
    pub fn is<P>(&self) -> bool
    where
        P: Any,
    {
        self.payload.is::<P>()
    }

    /// Access the payload if it is of type `P`.
    pub fn downcast_ref<P>(&self) -> Option<&P>
    where
        P: Any,
    {
        self.payload.downcast_ref()
    }

    /// Take the payload if it is of type `P`, otherwise hand back `self`.
    pub fn downcast<P>(self) -> Result<P, Self>
    where
        P: Any,
    {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// Access the raw panic payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Convert into the raw panic payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continue unwinding with the captured payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {message}"),
            None => write!(f, "panicked with a non-string payload"),
        }
    }
}

impl fmt::Debug for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panicked")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl std::error::Error for Panicked {}
