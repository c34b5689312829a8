use miette::Diagnostic;
use thiserror::Error;

/// Top-level error for a build run, preserving the failing stage's
/// diagnostic.
#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] regen_config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] regen_registry::RegistryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(#[from] regen_emit::EmitError),
}

pub type Result<T> = std::result::Result<T, CliError>;
