use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read resource archive. Original error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// The path exists neither on the local filesystem nor in the resource namespace.
    #[error("Variables file/directory '{path}' does not exist.")]
    SourceNotFound { path: String },

    /// A resolved directory holds no regular files.
    #[error("Variables directory '{path}' is empty.")]
    EmptyDirectory { path: String },

    /// An accepted file failed to decode as a mapping-rooted document.
    #[error("Cannot read variables from '{source_path}'. Original error: {reason}")]
    MalformedContent { source_path: String, reason: String },

    #[error("Cannot proceed: template '{path}' does not exist.")]
    TemplateNotFound { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
