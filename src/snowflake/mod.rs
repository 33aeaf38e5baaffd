//! Snowflake identifiers.
//!
//! FerrisChat snowflakes are 128-bit integers laid out as:
//!
//! ```text
//! ┌──────────────────────────────────┬──────────────────────────────────┐
//! │ 64 bits: ms since FERRIS_EPOCH   │ 64 bits: opaque uniqueness data  │
//! └──────────────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! Because the timestamp sits in the high bits, snowflakes sort by creation
//! time regardless of the low bits.

pub mod codec;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

pub use codec::{FERRIS_EPOCH, FERRIS_EPOCH_MS, datetime_to_snowflake, snowflake_creation_date};

/// A 128-bit FerrisChat snowflake.
///
/// Signed so that pre-epoch timestamps survive the arithmetic shift.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Snowflake(i128);

impl Snowflake {
    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(raw: i128) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    #[must_use]
    pub const fn get(self) -> i128 {
        self.0
    }

    /// Compose a snowflake from a millisecond offset (relative to
    /// [`FERRIS_EPOCH_MS`]) and the opaque low bits.
    #[must_use]
    pub const fn from_parts(timestamp_offset_ms: i64, low: u64) -> Self {
        Self(((timestamp_offset_ms as i128) << 64) | (low as i128))
    }

    /// Millisecond offset from [`FERRIS_EPOCH_MS`] stored in the high bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // i128 >> 64 always fits in i64
    pub const fn timestamp_offset_ms(self) -> i64 {
        (self.0 >> 64) as i64
    }

    /// The opaque low 64 bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn low_bits(self) -> u64 {
        self.0 as u64
    }

    /// Whether the raw value is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Creation timestamp encoded in this snowflake.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp is outside the representable range.
    pub fn created_at(self) -> Result<NaiveDateTime> {
        snowflake_creation_date(self)
    }

    /// A snowflake created at the given instant, with zeroed low bits.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        datetime_to_snowflake(dt)
    }

    /// Read a snowflake out of a JSON value.
    ///
    /// Accepts integers and decimal strings; anything else yields `None`.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.to_string().parse().ok(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i128> for Snowflake {
    fn from(raw: i128) -> Self {
        Self(raw)
    }
}

impl From<i64> for Snowflake {
    fn from(raw: i64) -> Self {
        Self(i128::from(raw))
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self(i128::from(raw))
    }
}

impl From<Snowflake> for i128 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}
