//! # Ferris Model
//!
//! The object model shared by FerrisChat clients:
//!
//! - **Snowflakes**: 128-bit ids carrying their creation time in the high bits
//! - **Identity base types**: [`SnowflakeObject`], [`Entity`] and the anonymous
//!   [`Object`] wrapper
//! - **Utilities**: ASCII-safe JSON, id sanitizing, invite parsing, search and
//!   sync/async normalization
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         ferris-model                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌─────────────┐   ┌──────────────────────┐ │
//! │  │  Domain    │ → │  Snowflake  │   │  Utils               │ │
//! │  │  (Entity)  │   │  Codec      │   │  (json, ids, async)  │ │
//! │  └────────────┘   └─────────────┘   └──────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;
pub mod snowflake;
pub mod utils;

pub use crate::config::{ClientConfig, LogFormat, ObservabilityConfig};
pub use crate::domain::{Data, DataExt, Entity, Object, SnowflakeObject, SnowflakeSlot, entity_eq};
pub use crate::error::{Error, Result, to_error_string};
pub use crate::snowflake::{
    FERRIS_EPOCH, FERRIS_EPOCH_MS, Snowflake, datetime_to_snowflake, snowflake_creation_date,
};
pub use crate::utils::{
    AsyncFn, IntoSnowflake, MaybeAsync, ensure_async, find, from_json, from_json_as,
    parse_invite_code, sanitize_id, to_json,
};

/// Initialize logging based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns [`Error::Logging`] if the filter directive is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| Error::Logging(e.to_string()))?;

    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Json => subscriber.with(fmt::layer().json()).try_init(),
        LogFormat::Text => subscriber.with(fmt::layer()).try_init(),
    };
    installed.map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        format = %config.log_format,
        "Logging initialized"
    );
    Ok(())
}
