//! Context format detection

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

use crate::source::Source;

/// Format of a context argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextFormat {
    Json,
    Yaml,
    Csv,
}

impl ContextFormat {
    /// Resolve the format of a context source.
    ///
    /// An explicit hint wins. A file is classified by its extension. A literal
    /// that looks like a `.csv` path is CSV so that loading reports the missing
    /// file. Everything else is YAML, which also accepts JSON text.
    pub fn resolve(source: &Source, hint: Option<ContextFormat>) -> ContextFormat {
        if let Some(format) = hint {
            return format;
        }
        match source {
            Source::File { path, .. } => Self::from_path(path).unwrap_or(ContextFormat::Yaml),
            Source::Literal(text) if looks_like_csv_path(text) => ContextFormat::Csv,
            Source::Literal(_) | Source::Stdin(_) => ContextFormat::Yaml,
        }
    }

    /// Format implied by a file extension.
    pub fn from_path(path: &Path) -> Option<ContextFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ContextFormat::Csv),
            "json" => Some(ContextFormat::Json),
            "yaml" | "yml" => Some(ContextFormat::Yaml),
            _ => None,
        }
    }
}

/// A single whitespace-free token ending in `.csv`.
pub fn looks_like_csv_path(text: &str) -> bool {
    !text.is_empty()
        && !text.chars().any(char::is_whitespace)
        && ContextFormat::from_path(Path::new(text)) == Some(ContextFormat::Csv)
}

impl fmt::Display for ContextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextFormat::Json => "JSON",
            ContextFormat::Yaml => "YAML",
            ContextFormat::Csv => "CSV",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(path: &str) -> Source {
        Source::File {
            path: PathBuf::from(path),
            text: String::new(),
        }
    }

    #[test]
    fn test_hint_wins_over_extension() {
        assert_eq!(
            ContextFormat::resolve(&file("rows.csv"), Some(ContextFormat::Json)),
            ContextFormat::Json
        );
        assert_eq!(
            ContextFormat::resolve(&file("data.json"), Some(ContextFormat::Csv)),
            ContextFormat::Csv
        );
    }

    #[test]
    fn test_file_extension_without_hint() {
        assert_eq!(ContextFormat::resolve(&file("rows.csv"), None), ContextFormat::Csv);
        assert_eq!(ContextFormat::resolve(&file("ROWS.CSV"), None), ContextFormat::Csv);
        assert_eq!(ContextFormat::resolve(&file("data.json"), None), ContextFormat::Json);
        assert_eq!(ContextFormat::resolve(&file("data.yml"), None), ContextFormat::Yaml);
        assert_eq!(ContextFormat::resolve(&file("notes.txt"), None), ContextFormat::Yaml);
        assert_eq!(ContextFormat::resolve(&file("context"), None), ContextFormat::Yaml);
    }

    #[test]
    fn test_literals_default_to_yaml() {
        let json = Source::Literal(r#"{"name": "chris"}"#.to_string());
        assert_eq!(ContextFormat::resolve(&json, None), ContextFormat::Yaml);
        let yaml = Source::Literal("name: chris.csv".to_string());
        assert_eq!(ContextFormat::resolve(&yaml, None), ContextFormat::Yaml);
    }

    #[test]
    fn test_missing_csv_path_is_csv() {
        let missing = Source::Literal("missing/rows.csv".to_string());
        assert_eq!(ContextFormat::resolve(&missing, None), ContextFormat::Csv);
    }

    #[test]
    fn test_stdin_is_yaml() {
        let stdin = Source::Stdin("a,b\n1,2\n".to_string());
        assert_eq!(ContextFormat::resolve(&stdin, None), ContextFormat::Yaml);
        assert_eq!(
            ContextFormat::resolve(&stdin, Some(ContextFormat::Csv)),
            ContextFormat::Csv
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ContextFormat::Csv.to_string(), "CSV");
        assert_eq!(ContextFormat::Json.to_string(), "JSON");
    }
}
