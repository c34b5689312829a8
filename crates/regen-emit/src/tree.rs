//! Output tree emission.
//!
//! One namespace root serves three path families on a static host:
//!
//! ```text
//! <root>/servers/index.html                         GET /servers
//! <root>/servers/<id>/versions/latest               GET /servers/{id}/versions/latest
//! <root>/servers/<id>/versions/<version>            GET /servers/{id}/versions/{version}
//! ```
//!
//! The listing lives in `index.html` so the host serves it for the bare
//! `servers` URL while per-server files nest underneath. `latest` and the
//! exact-version file carry identical payloads; readers may query either.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use regen_registry::{ServerListing, ServerResponse};
use regen_utils::{
    fs::{ensure_dir_exists, promote_dir, safe_remove},
    path::encode_path_segment,
};
use serde::Serialize;
use tracing::debug;

use crate::error::{ErrorContext, Result};

/// Namespace roots emitted per build: the primary API version and its
/// compatibility alias. Both receive byte-identical trees.
pub const API_NAMESPACES: [&str; 2] = ["v0.1", "v0"];

/// Serializes `value` as pretty-printed JSON at `path`, creating parents.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    let file =
        File::create(path).with_context(|| format!("creating file `{}`", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .flush()
        .with_context(|| format!("writing file `{}`", path.display()))?;

    debug!("Wrote {}", path.display());
    Ok(())
}

/// Writes one namespace root.
///
/// Emits the listing document at the collection endpoint, then both the
/// `latest` alias and the exact-version document for every server. Server ids
/// and versions are percent-encoded into single path segments; a value like
/// `a/b` cannot nest an extra directory.
pub fn emit_tree<P: AsRef<Path>>(
    root: P,
    responses: &[ServerResponse],
    listing: &ServerListing,
) -> Result<()> {
    let servers_dir = root.as_ref().join("servers");
    ensure_dir_exists(&servers_dir)?;

    write_json(&servers_dir.join("index.html"), listing)?;

    for response in responses {
        let versions_dir = servers_dir
            .join(encode_path_segment(&response.server.name))
            .join("versions");

        write_json(&versions_dir.join("latest"), response)?;
        write_json(
            &versions_dir.join(encode_path_segment(&response.server.version)),
            response,
        )?;
    }

    Ok(())
}

fn staging_dir(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "registry".into());
    name.push(".staging");
    target.with_file_name(name)
}

/// Emits the complete output tree and swaps it into place.
///
/// The full tree, one subtree per namespace in [`API_NAMESPACES`], is built
/// in a staging directory next to `output_root`, then promoted over it in
/// one rename. The final path never holds a partially written tree, stale
/// files from a previous run never survive, and a failed run leaves the
/// previous output untouched.
pub fn emit_registry<P: AsRef<Path>>(
    output_root: P,
    responses: &[ServerResponse],
    listing: &ServerListing,
) -> Result<()> {
    let output_root = output_root.as_ref();
    let staging = staging_dir(output_root);

    // A leftover staging tree from an interrupted run is stale; drop it.
    safe_remove(&staging)?;

    for namespace in API_NAMESPACES {
        emit_tree(staging.join(namespace), responses, listing)?;
    }

    promote_dir(&staging, output_root)?;
    Ok(())
}
