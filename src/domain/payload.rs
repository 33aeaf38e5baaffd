//! Raw payloads handed to [`Entity::process_data`](super::Entity::process_data).

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::snowflake::Snowflake;

/// A raw JSON object payload.
pub type Data = Map<String, Value>;

/// Typed field access for payloads.
pub trait DataExt {
    /// Read a required snowflake field (integer or decimal string).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`] if the field is missing or not a
    /// snowflake.
    fn snowflake(&self, key: &str) -> Result<Snowflake>;

    /// Read an optional snowflake field. `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`] if the field is present but not a
    /// snowflake.
    fn opt_snowflake(&self, key: &str) -> Result<Option<Snowflake>>;

    /// Read a required string field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`] if the field is missing or not a
    /// string.
    fn string(&self, key: &str) -> Result<&str>;

    /// Read an optional string field. `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`] if the field is present but not a
    /// string.
    fn opt_string(&self, key: &str) -> Result<Option<&str>>;

    /// Deserialize a field into any owned type. Missing fields deserialize
    /// from `null`, so `Option<T>` targets treat them as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the value does not match `T`.
    fn field<T: DeserializeOwned>(&self, key: &str) -> Result<T>;
}

impl DataExt for Data {
    fn snowflake(&self, key: &str) -> Result<Snowflake> {
        self.opt_snowflake(key)?
            .ok_or_else(|| Error::invalid_field(key, "a snowflake"))
    }

    fn opt_snowflake(&self, key: &str) -> Result<Option<Snowflake>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Snowflake::from_json_value(value)
                .map(Some)
                .ok_or_else(|| Error::invalid_field(key, "a snowflake")),
        }
    }

    fn string(&self, key: &str) -> Result<&str> {
        self.opt_string(key)?
            .ok_or_else(|| Error::invalid_field(key, "a string"))
    }

    fn opt_string(&self, key: &str) -> Result<Option<&str>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(Error::invalid_field(key, "a string")),
        }
    }

    fn field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get(key).cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Data {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_snowflake_fields() {
        let payload = data(json!({"id": 12, "owner_id": "34", "parent_id": null}));
        assert_eq!(payload.snowflake("id").unwrap(), Snowflake::new(12));
        assert_eq!(payload.snowflake("owner_id").unwrap(), Snowflake::new(34));
        assert_eq!(payload.opt_snowflake("parent_id").unwrap(), None);
        assert_eq!(payload.opt_snowflake("missing").unwrap(), None);
        assert!(payload.snowflake("missing").is_err());
    }

    #[test]
    fn test_wrong_shape() {
        let payload = data(json!({"id": true, "name": 5}));
        assert!(matches!(
            payload.snowflake("id"),
            Err(Error::InvalidPayload(_))
        ));
        assert!(matches!(
            payload.opt_string("name"),
            Err(Error::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_string_fields() {
        let payload = data(json!({"name": "ferris", "topic": null}));
        assert_eq!(payload.string("name").unwrap(), "ferris");
        assert_eq!(payload.opt_string("topic").unwrap(), None);
    }

    #[test]
    fn test_typed_field() {
        let payload = data(json!({"flags": 6, "tags": ["a", "b"]}));
        assert_eq!(payload.field::<u32>("flags").unwrap(), 6);
        assert_eq!(
            payload.field::<Vec<String>>("tags").unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(payload.field::<Option<u32>>("missing").unwrap(), None);
        assert!(matches!(
            payload.field::<u32>("tags"),
            Err(Error::Json(_))
        ));
    }
}
