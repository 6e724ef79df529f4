use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// The block has no file declared for the current render.
    #[error("Block '{block}' is not declared.")]
    UndeclaredBlock { block: String },

    /// The block file could not be read.
    #[error("Cannot read block '{block}' from '{}'. Original error: {source}", path.display())]
    BlockRead {
        block: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Render data must be a string-keyed mapping, got {kind}.")]
    InvalidData { kind: String },

    #[error("Variables passed to block '{block}' must be a mapping, got {kind}.")]
    InvalidVars { block: String, kind: String },

    #[error("Cannot loop over a value of type {kind}.")]
    NotIterable { kind: String },

    #[error("No configuration file found in '{template_dir}'. Tried: {config_files}.")]
    ConfigNotFound { template_dir: String, config_files: String },

    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with inlay's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Converts the error into one that can cross a minijinja function call.
    ///
    /// Errors raised by minijinja itself are passed through unchanged so nested
    /// template failures keep their original location information.
    pub(crate) fn into_template_error(self) -> minijinja::Error {
        match self {
            Error::MinijinjaError(err) => err,
            other => {
                minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, other.to_string())
                    .with_source(other)
            }
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
