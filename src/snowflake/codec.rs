//! Conversions between snowflakes and creation timestamps.

use chrono::{DateTime, NaiveDateTime, TimeZone};

use super::Snowflake;
use crate::error::{Error, Result};

/// FerrisChat epoch in milliseconds (2020-01-01T00:00:00Z).
pub const FERRIS_EPOCH_MS: i64 = 1_577_836_800_000;

/// FerrisChat epoch in seconds (2020-01-01T00:00:00Z).
pub const FERRIS_EPOCH: i64 = 1_577_836_800;

/// Returns the creation timestamp of the given snowflake.
///
/// The result is a naive datetime in UTC. Only the high 64 bits are read.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if the encoded instant cannot be
/// represented as a datetime.
pub fn snowflake_creation_date(snowflake: Snowflake) -> Result<NaiveDateTime> {
    let millis = snowflake
        .timestamp_offset_ms()
        .checked_add(FERRIS_EPOCH_MS)
        .ok_or(Error::TimestampOutOfRange(snowflake))?;

    let created = DateTime::from_timestamp_millis(millis)
        .ok_or(Error::TimestampOutOfRange(snowflake))?
        .naive_utc();

    tracing::trace!(%snowflake, %created, "Decoded snowflake timestamp");
    Ok(created)
}

/// Generates a snowflake that was created at the given instant.
///
/// Sub-millisecond precision is truncated toward zero and the low 64 bits are
/// left zeroed, so the result is not unique on its own. Callers that need
/// uniqueness should use [`Snowflake::from_parts`].
#[must_use]
pub fn datetime_to_snowflake<Tz: TimeZone>(dt: &DateTime<Tz>) -> Snowflake {
    let offset_us = i128::from(dt.timestamp_micros()) - i128::from(FERRIS_EPOCH_MS) * 1000;
    // Integer division truncates toward zero.
    let offset_ms = offset_us / 1000;
    Snowflake::new(offset_ms << 64)
}
