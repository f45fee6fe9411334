//! Rendering of arbitrary payloads into short diagnostic strings.
//!
//! These helpers only ever feed the messages of [`UnwrapError`]. They never
//! fail and never affect program logic.
//!
//! [`UnwrapError`]: crate::UnwrapError

use std::any;
use std::fmt::{self, Write};

/// Compact renderings longer than this many characters are pretty-printed
/// instead.
pub const INLINE_LIMIT: usize = 80;

/// Render a value into a human-readable string through its [`Debug`]
/// implementation.
///
/// Strings render quoted, numbers, booleans and absent markers such as `None`
/// or `()` render in their natural form. Values whose compact rendering is
/// long or spans several lines are pretty-printed with `{:#?}`. If the
/// [`Debug`] implementation itself reports an error, the type name in
/// brackets is rendered instead.
///
/// ```
/// use outcome::describe;
///
/// assert_eq!(describe("boom"), "\"boom\"");
/// assert_eq!(describe(&42), "42");
/// assert_eq!(describe(&None::<u32>), "None");
/// ```
///
/// [`Debug`]: fmt::Debug
pub fn describe<T>(value: &T) -> String
where
    T: ?Sized + fmt::Debug,
{
    let mut out = String::new();

    if write!(out, "{value:?}").is_err() {
        return type_tag::<T>();
    }

    if out.len() <= INLINE_LIMIT && !out.contains('\n') {
        return out;
    }

    out.clear();

    if write!(out, "{value:#?}").is_err() {
        return type_tag::<T>();
    }

    out
}

/// Render a value into a human-readable string through its [`Serialize`]
/// implementation.
///
/// Strings render quoted, numbers, booleans and `null` render in their natural
/// form and everything else is pretty-printed as JSON. Values which cannot be
/// serialized, such as maps with non-string keys, render as the type name in
/// brackets.
///
/// [`Serialize`]: serde::Serialize
#[cfg(feature = "serde")]
pub fn describe_json<T>(value: &T) -> String
where
    T: ?Sized + serde::Serialize,
{
    use serde_json::Value;

    let value = match serde_json::to_value(value) {
        Ok(value) => value,
        Err(..) => return type_tag::<T>(),
    };

    match &value {
        Value::Null | Value::Bool(..) | Value::Number(..) | Value::String(..) => value.to_string(),
        Value::Array(..) | Value::Object(..) => match serde_json::to_string_pretty(&value) {
            Ok(string) => string,
            Err(..) => type_tag::<T>(),
        },
    }
}

fn type_tag<T>() -> String
where
    T: ?Sized,
{
    format!("[{}]", any::type_name::<T>())
}
