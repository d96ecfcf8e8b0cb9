//! Resolution of positional arguments that name a file or carry inline text
//!
//! The template and context arguments accept either a path or the content
//! itself. Resolution first tries the argument as a path and records the
//! outcome as a [`Resolution`]; only a definite "this is not a path" answer
//! falls back to the literal. Real I/O failures are reported.

use std::fmt;
use std::io::{self, BufRead, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, fs};

/// Argument value that reads standard input
pub const STDIN_ARG: &str = "-";

const STDIN_ORIGIN: &str = "<stdin>";

/// Outcome of trying an argument as a file path
#[derive(Debug, PartialEq)]
pub enum Resolution {
    Resolved(String),
    NotAPath,
}

/// Text of a resolved argument and where it came from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File { path: PathBuf, text: String },
    Literal(String),
    Stdin(String),
}

impl Source {
    /// Resolve an argument as a file, falling back to the literal text.
    pub fn from_arg(arg: &str) -> Result<Source> {
        match resolve_path(Path::new(arg))? {
            Resolution::Resolved(text) => {
                debug!(path = arg, "argument resolved to file");
                Ok(Source::File {
                    path: PathBuf::from(arg),
                    text,
                })
            }
            Resolution::NotAPath => {
                debug!("argument is not a file, using it as literal text");
                Ok(Source::Literal(arg.to_string()))
            }
        }
    }

    /// Read the whole of `reader` as a source.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Source> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| fs::read_failed(STDIN_ORIGIN, e.to_string()))?;
        Ok(Source::Stdin(text))
    }

    pub fn text(&self) -> &str {
        match self {
            Source::File { text, .. } | Source::Literal(text) | Source::Stdin(text) => text,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File { path, .. } => write!(f, "{}", path.display()),
            Source::Literal(_) => f.write_str("<literal>"),
            Source::Stdin(_) => f.write_str(STDIN_ORIGIN),
        }
    }
}

/// Try to read `path` as a UTF-8 file.
///
/// Missing files and names the OS rejects outright are `NotAPath`; any other
/// failure (permissions, directories, invalid UTF-8) is an error.
pub fn resolve_path(path: &Path) -> Result<Resolution> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Resolution::Resolved(text)),
        Err(e) if is_not_a_path(&e) => Ok(Resolution::NotAPath),
        Err(e) => Err(fs::read_failed(path.display().to_string(), e.to_string())),
    }
}

fn is_not_a_path(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::NotFound | ErrorKind::InvalidInput | ErrorKind::InvalidFilename
    )
}
