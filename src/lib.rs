/// Handles argument parsing and run orchestration.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for built-in types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Resolves user paths against the local filesystem and packaged resources.
pub mod loader;

/// Template rendering functionality.
pub mod renderer;

/// Template loading and per-result rendering.
pub mod template;

/// Variable file parsing and aggregation.
pub mod variables;
