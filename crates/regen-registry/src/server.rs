//! Registry document types.
//!
//! These structs define the JSON shapes written into the output tree: the
//! per-server response document and the aggregate listing document. Field
//! order matters for byte-for-byte reproducible output, so struct fields are
//! declared in serialization order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod timestamp {
    //! Registry timestamps are RFC 3339 UTC strings with millisecond
    //! precision, e.g. `2026-08-05T10:30:00.000Z`.

    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Publication status of a registry entry.
///
/// Every entry this generator publishes is `active`; the variant exists so
/// the wire value is typed rather than a loose string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Active,
}

/// The server description carried in a response document.
///
/// `name` must equal the configured server id exactly; it is the join key
/// other tooling uses to match a server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerDetail {
    pub name: String,
    pub description: String,
    pub title: String,
    pub version: String,
}

/// Registry metadata attached to every response document.
///
/// Both timestamps carry the single instant captured at the start of the
/// build, so all entries of one batch report identical publish times.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryMeta {
    pub status: ServerStatus,

    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,

    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,

    pub is_latest: bool,
}

impl RegistryMeta {
    /// Metadata for a freshly published entry, stamped with the build instant.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            status: ServerStatus::Active,
            published_at: now,
            updated_at: now,
            is_latest: true,
        }
    }
}

/// One server's response document, the unit written to per-version paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerResponse {
    pub server: ServerDetail,
    pub meta: RegistryMeta,
}

/// Pagination metadata of the listing document.
///
/// The generator never paginates: the cursor is always `null` and `count`
/// equals the number of entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMetadata {
    pub next_cursor: Option<String>,
    pub count: usize,
}

/// The aggregate listing document served at the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerListing {
    pub servers: Vec<ServerResponse>,
    pub metadata: ListingMetadata,
}
