use std::path::Path;

use chrono::Utc;
use regen_config::load_servers;
use regen_emit::emit_registry;
use regen_registry::build_registry;
use tracing::{debug, info};

use crate::error::Result;

/// Default output root. A static host serves this directory as-is.
pub const DEFAULT_OUTPUT_ROOT: &str = "public";

/// Runs the full build: load the configured servers, derive the registry
/// documents, and emit the output tree.
///
/// The clock is read exactly once, before the first entry is processed, and
/// threaded through the whole build; every document of the run carries this
/// one instant. Any failure aborts before the output root is touched.
pub fn run_build(output_root: &Path) -> Result<()> {
    let now = Utc::now();

    let servers = load_servers()?;
    debug!("Loaded {} server entries", servers.len());

    let (responses, listing) = build_registry(&servers, now)?;
    emit_registry(output_root, &responses, &listing)?;

    info!(
        "Published {} server(s) under {}",
        responses.len(),
        output_root.display()
    );

    Ok(())
}
