//! JSON encoding and decoding.
//!
//! Encoded output is pure ASCII: every non-ASCII character is written as a
//! `\uXXXX` escape (surrogate pairs above the BMP), so payloads survive
//! ASCII-only transports.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde_json::ser::Formatter;
use serde_json::{Serializer, Value};

use crate::error::Result;

/// Compact formatter that escapes non-ASCII characters.
///
/// Everything except string fragments uses the default (compact) output.
#[derive(Debug, Clone, Copy, Default)]
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize a value to ASCII-only JSON text.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON (for example
/// a map with non-string keys).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf).map_err(serde_json::Error::custom)?)
}

/// Parse JSON text into a [`Value`].
///
/// Empty input yields [`Value::Null`] instead of a parse error.
///
/// # Errors
///
/// Returns an error if non-empty input is not valid JSON.
pub fn from_json(text: &str) -> Result<Value> {
    if text.is_empty() {
        tracing::trace!("Empty JSON input decoded as null");
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

/// Parse JSON text into a typed value.
///
/// Empty input and a literal `null` both yield `None`.
///
/// # Errors
///
/// Returns an error if non-empty input is not valid JSON or does not match
/// `T`.
pub fn from_json_as<T: DeserializeOwned>(text: &str) -> Result<Option<T>> {
    if text.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str(text)?)
}
