//! Utility functions.
//!
//! Stateless helpers shared by the rest of the client: JSON handling, search,
//! id sanitizing, invite parsing and sync/async normalization.

pub mod find;
pub mod id;
pub mod invite;
pub mod json;
pub mod maybe_async;

pub use find::find;
pub use id::{IntoSnowflake, sanitize_id};
pub use invite::{INVITE_REGEX, parse_invite_code};
pub use json::{from_json, from_json_as, to_json};
pub use maybe_async::{AsyncFn, BoxFuture, MaybeAsync, ensure_async};
