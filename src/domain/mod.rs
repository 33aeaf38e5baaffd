//! Domain models for FerrisChat.
//!
//! This module contains the identity base types every FerrisChat object
//! builds on: snowflake storage, the entity capability and raw payloads.

pub mod entity;
pub mod identity;
pub mod payload;

pub use entity::{Entity, entity_eq};
pub use identity::{Object, SnowflakeObject, SnowflakeSlot};
pub use payload::{Data, DataExt};
