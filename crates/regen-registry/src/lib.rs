//! Registry document construction for the regen registry generator.
//!
//! This crate turns the configured server list into the documents the
//! generated API serves: one [`ServerResponse`] per server and a single
//! [`ServerListing`] aggregating them.
//!
//! # Overview
//!
//! [`build_registry`] is a single mapping pass over the configuration, in
//! input order. It validates each entry, applies the title/description
//! defaulting rules, and stamps every document with one shared build
//! timestamp so all entries of a batch report identical publish times.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use regen_config::ServerConfig;
//! use regen_registry::build_registry;
//!
//! fn build() -> regen_registry::Result<()> {
//!     let configs = vec![ServerConfig {
//!         id: "echo".to_string(),
//!         version: "1.0.0".to_string(),
//!         ..Default::default()
//!     }];
//!     let (responses, listing) = build_registry(&configs, Utc::now())?;
//!     assert_eq!(listing.metadata.count, responses.len());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod server;

pub use builder::build_registry;
pub use error::{RegistryError, Result};
pub use server::{
    ListingMetadata, RegistryMeta, ServerDetail, ServerListing, ServerResponse, ServerStatus,
};
