use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Error while {action}: {source}")]
    #[diagnostic(
        code(regen_config::io),
        help("Check that the configuration file exists and is readable")
    )]
    IoError {
        action: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(
        code(regen_config::json),
        help("Check the configuration file for JSON syntax errors")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration must have a top-level `servers` array")]
    #[diagnostic(
        code(regen_config::missing_servers),
        help("Add a `servers` array listing the servers to publish")
    )]
    MissingServersArray,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
