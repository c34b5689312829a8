use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while turning configured entries into registry documents.
#[derive(Error, Diagnostic, Debug)]
pub enum RegistryError {
    #[error("Server entry {entry} is missing required field `{field}`")]
    #[diagnostic(
        code(regen_registry::invalid_entry),
        help("Every server entry needs a non-empty `id` and `version`")
    )]
    InvalidServerEntry {
        entry: String,
        field: &'static str,
    },

    #[error("Duplicate server id `{id}` (entries #{first} and #{second})")]
    #[diagnostic(
        code(regen_registry::duplicate_id),
        help("Server ids must be unique; each id maps to a single output path")
    )]
    DuplicateServerId {
        id: String,
        first: usize,
        second: usize,
    },
}

/// A specialized Result type for registry construction.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::InvalidServerEntry {
            entry: "#2 (`echo`)".to_string(),
            field: "version",
        };
        assert_eq!(
            err.to_string(),
            "Server entry #2 (`echo`) is missing required field `version`"
        );

        let err = RegistryError::DuplicateServerId {
            id: "echo".to_string(),
            first: 0,
            second: 3,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate server id `echo` (entries #0 and #3)"
        );
    }
}
