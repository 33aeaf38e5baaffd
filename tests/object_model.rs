//! Integration tests for the FerrisChat object model.
//!
//! These tests build small entity types the way a client would, feed them
//! JSON payloads and exercise the helpers through the public API only.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use serde_json::json;

use ferris_model::{
    AsyncFn, Data, DataExt, Entity, Error, MaybeAsync, Object, Result, Snowflake,
    SnowflakeObject, SnowflakeSlot, datetime_to_snowflake, ensure_async, entity_eq, find,
    from_json, impl_entity_identity, parse_invite_code, sanitize_id, snowflake_creation_date,
    to_error_string, to_json,
};

// ============================================================================
// Test Entities
// ============================================================================

#[derive(Debug, Default)]
struct User {
    slot: SnowflakeSlot,
    name: String,
    guild_ids: Vec<Snowflake>,
}

impl SnowflakeObject for User {
    fn snowflake_slot(&self) -> &SnowflakeSlot {
        &self.slot
    }
}

impl Entity for User {
    fn process_data(&mut self, data: &Data) -> Result<()> {
        self.slot.store(data.snowflake("id")?);
        self.name = data.string("name")?.to_string();
        self.guild_ids = data
            .field::<Option<Vec<Snowflake>>>("guilds")?
            .unwrap_or_default();
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Guild {
    slot: SnowflakeSlot,
    owner_id: Option<Snowflake>,
}

impl SnowflakeObject for Guild {
    fn snowflake_slot(&self) -> &SnowflakeSlot {
        &self.slot
    }
}

impl Entity for Guild {
    fn process_data(&mut self, data: &Data) -> Result<()> {
        self.slot.store(data.snowflake("id")?);
        self.owner_id = data.opt_snowflake("owner_id")?;
        Ok(())
    }
}

impl_entity_identity!(User, Guild);

fn payload(text: &str) -> Data {
    match from_json(text).expect("valid JSON") {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object payload, got {other}"),
    }
}

// ============================================================================
// Entities
// ============================================================================

#[test]
fn test_entity_from_wire_payload() {
    let id = Snowflake::from_parts(86_400_000, 42);
    let text = format!(r#"{{"id": {}, "name": "ferris", "guilds": [1, 2]}}"#, id.get());

    let user = User::from_data(&payload(&text)).unwrap();
    assert_eq!(user.id(), Some(id));
    assert_eq!(user.name, "ferris");
    assert_eq!(user.guild_ids, vec![Snowflake::new(1), Snowflake::new(2)]);

    let expected = NaiveDate::from_ymd_opt(2020, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(user.created_at().unwrap(), expected);
}

#[test]
fn test_large_snowflake_survives_payload() {
    let id = Snowflake::from_parts(i64::from(u32::MAX), u64::MAX);
    let text = format!(r#"{{"id": {}}}"#, id.get());
    let guild = Guild::from_data(&payload(&text)).unwrap();
    assert_eq!(guild.id(), Some(id));
    assert_eq!(guild.owner_id, None);
}

#[test]
fn test_entity_missing_id() {
    let err = User::from_data(&payload(r#"{"name": "ferris"}"#)).unwrap_err();
    assert!(matches!(err, Error::InvalidPayload(_)));
    assert_eq!(
        to_error_string(&err),
        "Error: Invalid payload: field 'id' must be a snowflake"
    );
}

#[test]
fn test_equality_across_types() {
    let user = User::from_data(&payload(r#"{"id": 5, "name": "a"}"#)).unwrap();
    let same_user = User::from_data(&payload(r#"{"id": 5, "name": "b"}"#)).unwrap();
    let guild = Guild::from_data(&payload(r#"{"id": 5}"#)).unwrap();

    assert_eq!(user, same_user);
    assert!(!entity_eq(&user, &guild));
    assert!(!entity_eq(&user, &"not an entity"));

    let entities: Vec<Box<dyn Entity>> = vec![Box::new(user), Box::new(same_user), Box::new(guild)];
    assert!(*entities[0] == *entities[1]);
    assert!(*entities[0] != *entities[2]);

    let unique: HashSet<_> = entities.iter().collect();
    assert_eq!(unique.len(), 2);
}

// ============================================================================
// Snowflakes
// ============================================================================

#[test]
fn test_snowflake_roundtrip_now() {
    let now = Utc::now();
    let id = datetime_to_snowflake(&now);
    let created = snowflake_creation_date(id).unwrap();
    assert_eq!(
        created.and_utc().timestamp_millis(),
        now.timestamp_millis()
    );
}

#[test]
fn test_snowflake_zero_is_epoch() {
    let created = snowflake_creation_date(Snowflake::new(0)).unwrap();
    assert_eq!(created.to_string(), "2020-01-01 00:00:00");
}

// ============================================================================
// Utilities
// ============================================================================

#[test]
fn test_json_is_ascii_and_roundtrips() {
    let value = json!({"name": "café", "ids": [1, 2, 3]});
    let text = to_json(&value).unwrap();
    assert!(text.is_ascii());
    assert_eq!(from_json(&text).unwrap(), value);
}

#[test]
fn test_find_entity_by_id() {
    let guilds = [
        Guild::from_data(&payload(r#"{"id": 1}"#)).unwrap(),
        Guild::from_data(&payload(r#"{"id": 2, "owner_id": "9"}"#)).unwrap(),
    ];
    let found = find(|g| g.id() == sanitize_id(2), &guilds).unwrap();
    assert_eq!(found.owner_id, Some(Snowflake::new(9)));
    assert!(find(|g| g.id() == sanitize_id(3), &guilds).is_none());
}

#[test]
fn test_sanitize_accepts_objects_and_raw_ids() {
    let object = Object::new(7i64);
    assert_eq!(sanitize_id(&object), Some(Snowflake::new(7)));
    assert_eq!(sanitize_id(7u64), Some(Snowflake::new(7)));
    assert_eq!(sanitize_id(0), None);
    assert_eq!(sanitize_id(None::<u64>), None);
}

#[test]
fn test_invite_codes() {
    assert_eq!(parse_invite_code("https://ferris.sh/AbC123"), Some("AbC123"));
    assert_eq!(parse_invite_code("nothing here"), None);
}

#[tokio::test]
async fn test_async_normalization() {
    fn lookup(id: i64) -> MaybeAsync<String> {
        if id == 0 {
            MaybeAsync::ready("cached".to_string())
        } else {
            MaybeAsync::pending(async move { format!("fetched {id}") })
        }
    }

    let sync = AsyncFn::from_sync(|()| 5);
    assert_eq!(sync.call(()).await, 5);

    let mixed = ensure_async(lookup);
    assert_eq!(mixed.call(0).await, "cached");
    assert_eq!(mixed.call(3).await, "fetched 3");
    assert_eq!(mixed.spawn(4).await.unwrap(), "fetched 4");
}
