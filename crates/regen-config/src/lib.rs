//! Configuration loading for the regen registry generator.
//!
//! The configuration file is a JSON document with a single top-level
//! `servers` array listing the servers this build publishes. Loading only
//! enforces the document shape; per-entry validation happens in the registry
//! builder so errors can name the offending entry.

pub mod config;
pub mod error;

pub use config::{load_servers, load_servers_from, ServerConfig, CONFIG_PATH};
pub use error::{ConfigError, Result};
