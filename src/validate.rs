//! Argument validation helpers
//!
//! Every public entry point validates its required arguments with these
//! helpers before issuing any network call. A missing argument and an
//! empty one are distinct error kinds so callers can tell them apart.

use crate::error::{Error, Result};

/// Reject an empty required string argument
pub(crate) fn non_empty<'a>(argument: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::empty_argument(argument));
    }
    Ok(value)
}

/// Reject an absent required argument
pub(crate) fn required<T>(argument: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::missing_argument(argument))
}

/// Reject an absent or empty required string argument
///
/// Absence takes precedence: `None` reports missing, `Some("")` reports empty.
pub(crate) fn required_string(argument: &str, value: Option<String>) -> Result<String> {
    let value = required(argument, value)?;
    non_empty(argument, &value)?;
    Ok(value)
}
