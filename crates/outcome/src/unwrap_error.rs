use std::any::{self, Any};
use std::fmt;
use std::panic::{self, PanicHookInfo};
use std::sync::Once;
use std::thread;

use thiserror::Error;

use crate::describe::describe;

/// The forced extraction which raised an [`UnwrapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UnwrapKind {
    /// A success payload was demanded from a `Failure`.
    Success,
    /// A failure payload was demanded from a `Success`.
    Failure,
}

impl UnwrapKind {
    /// The method that the kind corresponds to.
    pub(crate) fn method(self) -> &'static str {
        match self {
            UnwrapKind::Success => "unwrap_success",
            UnwrapKind::Failure => "unwrap_failure",
        }
    }

    /// The variant that was actually present when the extraction failed.
    pub(crate) fn found(self) -> &'static str {
        match self {
            UnwrapKind::Success => "Failure",
            UnwrapKind::Failure => "Success",
        }
    }
}

impl fmt::Display for UnwrapKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// Raised when an [`Outcome`] is forcibly unwrapped into the variant it does
/// not hold.
///
/// This signals a programming error rather than a domain failure. The
/// panicking unwraps raise it through [`std::panic::panic_any`], so code which
/// catches the unwind can tell it apart from any other panic:
///
/// ```
/// use std::panic;
/// use outcome::{failure, Outcome, UnwrapError};
///
/// let outcome: Outcome<u32, &str> = failure("boom");
///
/// let payload = panic::catch_unwind(move || outcome.unwrap_success()).unwrap_err();
/// let error = payload.downcast_ref::<UnwrapError>().unwrap();
///
/// assert_eq!(error.payload_ref::<&str>(), Some(&"boom"));
/// ```
///
/// The preserved payload is the one of the variant which *was* present.
///
/// [`Outcome`]: crate::Outcome
#[derive(Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
    kind: UnwrapKind,
    payload_type_name: &'static str,
    payload: Box<dyn Any + Send>,
}

impl UnwrapError {
    /// Construct an error with a default message describing the payload.
    pub(crate) fn new<P>(kind: UnwrapKind, payload: P) -> Self
    where
        P: fmt::Debug + Send + 'static,
    {
        let message = format!(
            "Called `{}` on a `{}` value: {}",
            kind.method(),
            kind.found(),
            describe(&payload)
        );

        Self::with_message(kind, message, payload)
    }

    /// Construct an error with a caller-provided message, used verbatim.
    pub(crate) fn with_message<P>(kind: UnwrapKind, message: impl Into<String>, payload: P) -> Self
    where
        P: Send + 'static,
    {
        Self {
            message: message.into(),
            kind,
            payload_type_name: any::type_name::<P>(),
            payload: Box::new(payload),
        }
    }

    /// Raise the error as a panic with `self` as the panic payload.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        install_panic_hook();

        tracing::error!(
            kind = %self.kind,
            payload = self.payload_type_name,
            "{}",
            self.message
        );

        panic::panic_any(self)
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Which unwrap raised the error.
    pub fn kind(&self) -> UnwrapKind {
        self.kind
    }

    /// The type name of the preserved payload, as reported by
    /// [`std::any::type_name`].
    pub fn payload_type_name(&self) -> &'static str {
        self.payload_type_name
    }

    /// Access the type-erased payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Access the payload if it is of type `P`.
    pub fn payload_ref<P>(&self) -> Option<&P>
    where
        P: Any,
    {
        self.payload.downcast_ref()
    }

    /// Take the payload out of the error if it is of type `P`, otherwise hand
    /// the error back.
    pub fn into_payload<P>(self) -> Result<P, Self>
    where
        P: Any,
    {
        let Self {
            message,
            kind,
            payload_type_name,
            payload,
        } = self;

        match payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self {
                message,
                kind,
                payload_type_name,
                payload,
            }),
        }
    }
}

impl fmt::Debug for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnwrapError")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("payload_type_name", &self.payload_type_name)
            .finish_non_exhaustive()
    }
}

pub(crate) static PANIC_HOOK: Once = Once::new();

/// Install a panic hook which reports an [`UnwrapError`] by its message.
///
/// A payload raised through [`std::panic::panic_any`] is not a string, so the
/// default hook would only report `Box<dyn Any>`. The installed hook prints
/// the message of an [`UnwrapError`] and hands every other panic to the hook
/// that was installed before it.
///
/// This is called the first time an unwrap raises, so calling it directly is
/// only needed to get the hook in place before a custom hook is installed on
/// top of it. Installing it more than once has no effect.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();

        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            match hook_message(info.payload()) {
                Some(message) => {
                    let thread = thread::current();
                    let name = thread.name().unwrap_or("<unnamed>");

                    match info.location() {
                        Some(location) => {
                            eprintln!("thread '{name}' panicked at {location}:\n{message}")
                        }
                        None => eprintln!("thread '{name}' panicked:\n{message}"),
                    }
                }
                None => previous(info),
            }
        }));
    });
}

/// The message to report for a panic payload, if it is an [`UnwrapError`].
pub(crate) fn hook_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload.downcast_ref::<UnwrapError>().map(UnwrapError::message)
}
