//! Error stringification.
//!
//! Renders errors as `{TypeName}: {message}`, e.g.
//! `ParseIntError: invalid digit found in string`, falling back to just the
//! type name when the error has no message.

use std::any::type_name;

/// Short type name of an error: last path segment, generics stripped.
///
/// Trait objects report their principal trait, so `dyn Error + Send` is
/// named `Error`.
#[must_use]
pub fn error_type_name<E: ?Sized>() -> &'static str {
    let full = type_name::<E>();
    let full = full.strip_prefix("dyn ").unwrap_or(full);
    let base = full.split(['<', ' ']).next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Format an error as `{TypeName}: {message}`.
///
/// If the message is empty or whitespace only, only the type name is
/// returned. Erased errors (`&dyn Error`, `Box<dyn Error>` via `as_ref`) are
/// accepted; their concrete type is not recoverable, so they are named by
/// their trait.
pub fn to_error_string<E: std::error::Error + ?Sized>(err: &E) -> String {
    let name = error_type_name::<E>();
    let message = err.to_string();

    if message.trim().is_empty() {
        name.to_string()
    } else {
        format!("{name}: {message}")
    }
}
