//! Snowflake identity capability.

use serde::{Deserialize, Serialize};

use crate::snowflake::Snowflake;

/// Storage for an object's snowflake.
///
/// Starts unset, so "never assigned" stays distinguishable from a zero id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnowflakeSlot(Option<Snowflake>);

impl SnowflakeSlot {
    /// An empty slot.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// A slot holding `id`.
    #[must_use]
    pub const fn with(id: Snowflake) -> Self {
        Self(Some(id))
    }

    /// Store the snowflake.
    ///
    /// Meant to be called once while building an object. A later call
    /// overwrites the previous value.
    pub fn store(&mut self, id: impl Into<Snowflake>) {
        let id = id.into();
        if let Some(previous) = self.0 {
            tracing::debug!(%previous, %id, "Overwriting stored snowflake");
        }
        self.0 = Some(id);
    }

    /// The stored snowflake, if any.
    #[must_use]
    pub const fn get(&self) -> Option<Snowflake> {
        self.0
    }

    /// Whether a snowflake has been stored.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Objects that carry a snowflake ID.
pub trait SnowflakeObject {
    /// The slot holding this object's snowflake.
    fn snowflake_slot(&self) -> &SnowflakeSlot;

    /// The snowflake ID of this object, `None` until stored.
    fn id(&self) -> Option<Snowflake> {
        self.snowflake_slot().get()
    }
}

/// An anonymous object that only has a snowflake ID.
///
/// Safe to construct by hand wherever an API wants something id-bearing but
/// only the raw id is at hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct Object {
    slot: SnowflakeSlot,
}

impl Object {
    /// Create an object with the given snowflake.
    #[must_use]
    pub fn new(id: impl Into<Snowflake>) -> Self {
        Self {
            slot: SnowflakeSlot::with(id.into()),
        }
    }
}

impl SnowflakeObject for Object {
    fn snowflake_slot(&self) -> &SnowflakeSlot {
        &self.slot
    }
}

impl From<Snowflake> for Object {
    fn from(id: Snowflake) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_unset() {
        let slot = SnowflakeSlot::default();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn test_zero_is_not_unset() {
        let mut slot = SnowflakeSlot::unset();
        slot.store(Snowflake::new(0));
        assert!(slot.is_set());
        assert_eq!(slot.get(), Some(Snowflake::new(0)));
    }

    #[test]
    fn test_store_overwrites() {
        let mut slot = SnowflakeSlot::unset();
        slot.store(1i64);
        slot.store(2i64);
        assert_eq!(slot.get(), Some(Snowflake::new(2)));
    }

    #[test]
    fn test_object_stores_id() {
        let object = Object::new(42i64);
        assert_eq!(object.id(), Some(Snowflake::new(42)));

        let object = Object::from(Snowflake::new(7));
        assert_eq!(object.id(), Some(Snowflake::new(7)));
    }

    #[test]
    fn test_slot_serde() {
        let slot = SnowflakeSlot::with(Snowflake::new(5));
        assert_eq!(serde_json::to_string(&slot).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&SnowflakeSlot::unset()).unwrap(),
            "null"
        );
    }
}
