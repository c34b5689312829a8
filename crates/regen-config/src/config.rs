use std::{
    fs,
    path::{Path, PathBuf},
    sync::{LazyLock, RwLock},
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};

fn empty_is_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// One configured server entry.
///
/// `id` doubles as the public server name and as a path segment in the
/// generated tree; `version` is the single version this build publishes.
/// Both are required to be non-empty, but that is enforced by the registry
/// builder rather than here so the error can point at the entry. Missing
/// strings deserialize to empty so a half-filled entry still loads.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub version: String,

    /// Display title, defaults to `id` when absent. Empty strings are
    /// normalized to `None` so they take the default too.
    #[serde(default, deserialize_with = "empty_is_none")]
    pub title: Option<String>,

    /// Human-readable description, defaults to empty when absent.
    #[serde(default, deserialize_with = "empty_is_none")]
    pub description: Option<String>,
}

/// Path of the configuration file read by [`load_servers`].
///
/// Defaults to `allowed-servers.json` in the working directory; the CLI
/// overrides it when `--config` is passed.
pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> =
    LazyLock::new(|| RwLock::new(PathBuf::from("allowed-servers.json")));

/// Loads the server list from the configured path.
///
/// See [`load_servers_from`] for the file format and error conditions.
pub fn load_servers() -> Result<Vec<ServerConfig>> {
    let config_path = CONFIG_PATH.read().unwrap().to_path_buf();
    load_servers_from(config_path)
}

/// Loads the server list from a JSON configuration file.
///
/// The document must carry a top-level `servers` array; any other top-level
/// fields are ignored. Entries are not validated individually here.
///
/// # Errors
///
/// * [`ConfigError::IoError`] if the file cannot be read
/// * [`ConfigError::JsonError`] if the content is not valid JSON or an entry
///   has a field of the wrong type
/// * [`ConfigError::MissingServersArray`] if `servers` is absent or not an
///   array
pub fn load_servers_from<P: AsRef<Path>>(path: P) -> Result<Vec<ServerConfig>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|err| ConfigError::IoError {
        action: format!("reading configuration file `{}`", path.display()),
        source: err,
    })?;

    let document: serde_json::Value = serde_json::from_str(&content)?;

    let servers = match document.get("servers") {
        Some(value) if value.is_array() => value.clone(),
        _ => return Err(ConfigError::MissingServersArray),
    };

    Ok(serde_json::from_value(servers)?)
}
