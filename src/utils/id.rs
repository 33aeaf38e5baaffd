//! Id sanitizing.
//!
//! Lets APIs accept either a raw snowflake or any id-bearing object.

use crate::domain::SnowflakeObject;
use crate::snowflake::Snowflake;

/// Values that can stand in for a snowflake.
pub trait IntoSnowflake {
    /// Resolve to a snowflake, or `None` if the value is empty.
    fn into_snowflake(self) -> Option<Snowflake>;
}

impl IntoSnowflake for Snowflake {
    fn into_snowflake(self) -> Option<Snowflake> {
        (!self.is_zero()).then_some(self)
    }
}

macro_rules! impl_into_snowflake_for_int {
    ($($int:ty),+) => {
        $(
            impl IntoSnowflake for $int {
                fn into_snowflake(self) -> Option<Snowflake> {
                    Snowflake::new(i128::from(self)).into_snowflake()
                }
            }
        )+
    };
}

impl_into_snowflake_for_int!(i32, u32, i64, u64, i128);

impl<T: IntoSnowflake> IntoSnowflake for Option<T> {
    fn into_snowflake(self) -> Option<Snowflake> {
        self.and_then(IntoSnowflake::into_snowflake)
    }
}

impl<T: SnowflakeObject + ?Sized> IntoSnowflake for &T {
    fn into_snowflake(self) -> Option<Snowflake> {
        self.id()
    }
}

/// Sanitizes an id.
///
/// `None` and zero resolve to `None`. Id-bearing objects resolve to their
/// stored snowflake (even a zero one); raw ids pass through unchanged.
pub fn sanitize_id(id: impl IntoSnowflake) -> Option<Snowflake> {
    id.into_snowflake()
}
