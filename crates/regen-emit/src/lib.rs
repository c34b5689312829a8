//! Output tree emission for the regen registry generator.
//!
//! Takes the documents built by `regen-registry` and writes them to a
//! directory tree laid out like the registry API it mimics, once per
//! supported namespace root. Emission is staged: the complete tree is
//! written next to the output root and swapped into place afterwards, so
//! the published path never exposes a half-built tree and never keeps stale
//! files from a previous configuration.

pub mod error;
pub mod tree;

pub use error::{EmitError, ErrorContext, Result};
pub use tree::{emit_registry, emit_tree, write_json, API_NAMESPACES};
