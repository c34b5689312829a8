//! The registry build pass.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use regen_config::ServerConfig;
use tracing::debug;

use crate::{
    error::{RegistryError, Result},
    server::{ListingMetadata, RegistryMeta, ServerDetail, ServerListing, ServerResponse},
};

fn entry_label(position: usize, config: &ServerConfig) -> String {
    if config.id.is_empty() {
        format!("#{position}")
    } else {
        format!("#{position} (`{}`)", config.id)
    }
}

/// Builds the registry documents from the configured server list.
///
/// Entries are processed in input order and that order is preserved in the
/// returned responses and in the listing. `now` is captured once by the
/// caller and stamped into every document; the clock is deliberately not
/// queried per entry so one build batch reports one publish time.
///
/// Given the same configs and the same `now`, the output serializes
/// byte-for-byte identically.
///
/// # Errors
///
/// * [`RegistryError::InvalidServerEntry`] if an entry has an empty `id` or
///   `version`, naming the entry by position and partial id
/// * [`RegistryError::DuplicateServerId`] if two entries share an id; both
///   would otherwise map to the same output path and the later one would
///   silently overwrite the earlier
pub fn build_registry(
    configs: &[ServerConfig],
    now: DateTime<Utc>,
) -> Result<(Vec<ServerResponse>, ServerListing)> {
    let mut responses = Vec::with_capacity(configs.len());
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(configs.len());

    for (position, config) in configs.iter().enumerate() {
        if config.id.is_empty() {
            return Err(RegistryError::InvalidServerEntry {
                entry: entry_label(position, config),
                field: "id",
            });
        }

        if config.version.is_empty() {
            return Err(RegistryError::InvalidServerEntry {
                entry: entry_label(position, config),
                field: "version",
            });
        }

        if let Some(&first) = seen.get(config.id.as_str()) {
            return Err(RegistryError::DuplicateServerId {
                id: config.id.clone(),
                first,
                second: position,
            });
        }
        seen.insert(&config.id, position);

        let server = ServerDetail {
            name: config.id.clone(),
            description: config.description.clone().unwrap_or_default(),
            title: config
                .title
                .clone()
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| config.id.clone()),
            version: config.version.clone(),
        };

        responses.push(ServerResponse {
            server,
            meta: RegistryMeta::new(now),
        });
    }

    debug!("Built {} registry document(s)", responses.len());

    let listing = ServerListing {
        servers: responses.clone(),
        metadata: ListingMetadata {
            next_cursor: None,
            count: responses.len(),
        },
    };

    Ok((responses, listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 5, 10, 30, 0).unwrap()
    }

    fn entry(id: &str, version: &str) -> ServerConfig {
        ServerConfig {
            id: id.to_string(),
            version: version.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let configs = vec![entry("echo", "1.0.0")];
        let (responses, _) = build_registry(&configs, fixed_now()).unwrap();

        let server = &responses[0].server;
        assert_eq!(server.name, "echo");
        assert_eq!(server.title, "echo");
        assert_eq!(server.description, "");
        assert_eq!(server.version, "1.0.0");
    }

    #[test]
    fn test_explicit_fields_copied() {
        let configs = vec![ServerConfig {
            id: "echo".to_string(),
            version: "1.0.0".to_string(),
            title: Some("Echo".to_string()),
            description: Some("test".to_string()),
        }];
        let (responses, _) = build_registry(&configs, fixed_now()).unwrap();

        assert_eq!(responses[0].server.title, "Echo");
        assert_eq!(responses[0].server.description, "test");
    }

    #[test]
    fn test_empty_title_falls_back_to_id() {
        let configs = vec![ServerConfig {
            id: "echo".to_string(),
            version: "1.0.0".to_string(),
            title: Some(String::new()),
            description: None,
        }];
        let (responses, _) = build_registry(&configs, fixed_now()).unwrap();
        assert_eq!(responses[0].server.title, "echo");
    }

    #[test]
    fn test_input_order_preserved() {
        let configs = vec![entry("zeta", "2.0.0"), entry("alpha", "1.0.0")];
        let (responses, listing) = build_registry(&configs, fixed_now()).unwrap();

        assert_eq!(responses[0].server.name, "zeta");
        assert_eq!(responses[1].server.name, "alpha");
        assert_eq!(listing.servers[0].server.name, "zeta");
        assert_eq!(listing.servers[1].server.name, "alpha");
    }

    #[test]
    fn test_listing_count_and_cursor() {
        let configs = vec![entry("a", "1"), entry("b", "2"), entry("c", "3")];
        let (_, listing) = build_registry(&configs, fixed_now()).unwrap();

        assert_eq!(listing.metadata.count, 3);
        assert_eq!(listing.servers.len(), 3);
        assert_eq!(listing.metadata.next_cursor, None);
    }

    #[test]
    fn test_shared_timestamp_across_entries() {
        let configs = vec![entry("a", "1"), entry("b", "2")];
        let (responses, _) = build_registry(&configs, fixed_now()).unwrap();

        assert_eq!(
            responses[0].meta.published_at,
            responses[1].meta.published_at
        );
        assert_eq!(responses[0].meta.published_at, responses[0].meta.updated_at);
    }

    #[test]
    fn test_deterministic_for_fixed_now() {
        let configs = vec![entry("a", "1"), entry("b", "2")];
        let first = build_registry(&configs, fixed_now()).unwrap();
        let second = build_registry(&configs, fixed_now()).unwrap();

        assert_eq!(
            serde_json::to_string(&first.1).unwrap(),
            serde_json::to_string(&second.1).unwrap()
        );
    }

    #[test]
    fn test_missing_id_rejected() {
        let configs = vec![entry("echo", "1.0.0"), entry("", "2.0.0")];
        let err = build_registry(&configs, fixed_now()).unwrap_err();

        match err {
            RegistryError::InvalidServerEntry { entry, field } => {
                assert_eq!(entry, "#1");
                assert_eq!(field, "id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_version_rejected() {
        let configs = vec![entry("echo", "")];
        let err = build_registry(&configs, fixed_now()).unwrap_err();

        match err {
            RegistryError::InvalidServerEntry { entry, field } => {
                assert_eq!(entry, "#0 (`echo`)");
                assert_eq!(field, "version");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let configs = vec![entry("echo", "1.0.0"), entry("other", "1.0.0"), entry("echo", "2.0.0")];
        let err = build_registry(&configs, fixed_now()).unwrap_err();

        match err {
            RegistryError::DuplicateServerId { id, first, second } => {
                assert_eq!(id, "echo");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_config_builds_empty_listing() {
        let (responses, listing) = build_registry(&[], fixed_now()).unwrap();
        assert!(responses.is_empty());
        assert_eq!(listing.metadata.count, 0);
    }
}
