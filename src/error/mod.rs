//! Error types and handling for stache
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`context`]: Context loading errors
//! - [`template`]: Rendering errors

pub mod context;
pub mod fs;
pub mod template;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stache operations
#[derive(Error, Diagnostic, Debug)]
pub enum StacheError {
    // Argument errors
    #[error("Missing argument: {name}")]
    #[diagnostic(code(stache::args::missing), help("Run 'stache --help' for usage"))]
    MissingArgument { name: String },

    #[error("Standard input is not available")]
    #[diagnostic(
        code(stache::args::stdin_unavailable),
        help("'-' reads a pipe, and only for one of template or context")
    )]
    StdinUnavailable,

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(stache::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(stache::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(stache::fs::io_error))]
    IoError { message: String },

    // Front matter errors
    #[error("Failed to parse YAML: {reason}")]
    #[diagnostic(code(stache::frontmatter::parse_failed))]
    YamlParseFailed { reason: String },

    #[error("Front matter opened with '---' is never closed")]
    #[diagnostic(
        code(stache::frontmatter::unterminated),
        help("End the front matter block with a line containing only '---'")
    )]
    UnterminatedFrontmatter,

    // Context errors
    #[error("Failed to parse {format} context from {origin}: {reason}")]
    #[diagnostic(
        code(stache::context::parse_failed),
        help("Pass --format to override format detection")
    )]
    ContextParseFailed {
        format: String,
        origin: String,
        reason: String,
    },

    #[error("Failed to open CSV file: {path}: {reason}")]
    #[diagnostic(code(stache::context::csv_open_failed))]
    CsvOpenFailed { path: String, reason: String },

    #[error("Failed to parse CSV context from {origin}: {reason}")]
    #[diagnostic(code(stache::context::csv_parse_failed))]
    CsvParseFailed { origin: String, reason: String },

    #[error("Context must be a mapping, found {found}")]
    #[diagnostic(
        code(stache::context::not_mapping),
        help("Top-level context must be key/value pairs, or a list of them")
    )]
    ContextNotMapping { found: String },

    #[error("--multiple {key} needs a list of rows as context")]
    #[diagnostic(
        code(stache::context::rows_required),
        help("Use a CSV file, or a JSON/YAML list of mappings")
    )]
    RowsRequired { key: String },

    // Rendering errors
    #[error("Failed to render template: {reason}")]
    #[diagnostic(code(stache::render::failed))]
    RenderFailed { reason: String },
}

impl From<std::io::Error> for StacheError {
    fn from(err: std::io::Error) -> Self {
        StacheError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for StacheError {
    fn from(err: serde_yaml::Error) -> Self {
        StacheError::YamlParseFailed {
            reason: err.to_string(),
        }
    }
}

impl From<mustache::Error> for StacheError {
    fn from(err: mustache::Error) -> Self {
        StacheError::RenderFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StacheError>;
