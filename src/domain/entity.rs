//! Entity capability and identity-based equality.
//!
//! Two entities are equal iff they are the same concrete type and carry the
//! same snowflake. Hashing uses the snowflake alone.

use std::any::{Any, TypeId};
use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;

use super::identity::SnowflakeObject;
use super::payload::Data;
use crate::error::{Error, Result};

/// Base trait for every FerrisChat domain object.
pub trait Entity: SnowflakeObject + Any {
    /// Absorb a raw payload into this entity's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is missing required fields or has
    /// fields of the wrong shape.
    fn process_data(&mut self, data: &Data) -> Result<()>;

    /// Creation timestamp derived from the snowflake.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsetId`] if no snowflake was stored, or
    /// [`Error::TimestampOutOfRange`] if it cannot be decoded.
    fn created_at(&self) -> Result<NaiveDateTime> {
        self.id().ok_or(Error::UnsetId)?.created_at()
    }

    /// Build an entity from a raw payload, starting from an unset identity.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Entity::process_data`].
    fn from_data(data: &Data) -> Result<Self>
    where
        Self: Default + Sized,
    {
        let mut entity = Self::default();
        entity.process_data(data)?;
        Ok(entity)
    }
}

fn concrete_type_id(entity: &(dyn Entity + 'static)) -> TypeId {
    let any: &(dyn Any + 'static) = entity;
    any.type_id()
}

impl PartialEq for dyn Entity {
    fn eq(&self, other: &Self) -> bool {
        concrete_type_id(self) == concrete_type_id(other) && self.id() == other.id()
    }
}

impl Eq for dyn Entity {}

impl Hash for dyn Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// Compare an entity against an arbitrary value.
///
/// Returns `false` for anything that is not the exact same concrete type.
pub fn entity_eq<E: Entity>(entity: &E, other: &dyn Any) -> bool {
    other
        .downcast_ref::<E>()
        .is_some_and(|other| other.id() == entity.id())
}

/// Implement `PartialEq`, `Eq` and `Hash` for entity types by snowflake.
///
/// ```ignore
/// impl_entity_identity!(User, Guild);
/// ```
#[macro_export]
macro_rules! impl_entity_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::domain::SnowflakeObject::id(self)
                        == $crate::domain::SnowflakeObject::id(other)
                }
            }

            impl ::core::cmp::Eq for $ty {}

            impl ::core::hash::Hash for $ty {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(&$crate::domain::SnowflakeObject::id(self), state);
                }
            }
        )+
    };
}
