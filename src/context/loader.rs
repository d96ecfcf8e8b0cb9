//! Context loading
//!
//! The format is resolved once by [`ContextFormat::resolve`]; loading is a
//! single dispatch over it.

use serde_json::Value;
use tracing::debug;

use super::format::{ContextFormat, looks_like_csv_path};
use super::{Context, ContextData};
use crate::error::{Result, StacheError, context};
use crate::frontmatter;
use crate::source::Source;

/// Load a context source in the given format.
pub fn load(source: &Source, format: ContextFormat) -> Result<ContextData> {
    debug!(%format, origin = %source, "loading context");
    match format {
        ContextFormat::Csv => load_csv(source).map(ContextData::Rows),
        ContextFormat::Json => load_json(source),
        ContextFormat::Yaml => load_yaml(source),
    }
}

fn load_csv(source: &Source) -> Result<Vec<Context>> {
    // A path-like literal means the named file does not exist
    if let Source::Literal(text) = source {
        if looks_like_csv_path(text) {
            return Err(context::csv_open_failed(
                text.as_str(),
                "No such file or directory",
            ));
        }
    }
    parse_csv(source.text(), &source.to_string())
}

/// Parse CSV text into one context per record, keyed by the header row.
///
/// Field values stay strings.
pub fn parse_csv(text: &str, origin: &str) -> Result<Vec<Context>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| context::csv_parse_failed(origin, e.to_string()))?
        .clone();

    reader
        .records()
        .map(|record| {
            let record = record.map_err(|e| context::csv_parse_failed(origin, e.to_string()))?;
            let mut row = Context::new();
            for (key, field) in headers.iter().zip(record.iter()) {
                row.insert(key, Value::String(field.to_string()));
            }
            Ok(row)
        })
        .collect()
}

fn load_json(source: &Source) -> Result<ContextData> {
    let value: Value = serde_json::from_str(source.text()).map_err(|e| {
        context::parse_failed(ContextFormat::Json.to_string(), source.to_string(), e.to_string())
    })?;
    ContextData::from_value(value)
}

/// YAML loading; text that is already valid JSON is taken as JSON.
fn load_yaml(source: &Source) -> Result<ContextData> {
    if let Ok(value) = serde_json::from_str::<Value>(source.text()) {
        debug!(origin = %source, "context is valid JSON");
        return ContextData::from_value(value);
    }
    let (value, _) = frontmatter::extract_value(source.text(), true).map_err(|e| match e {
        StacheError::YamlParseFailed { reason } => {
            context::parse_failed(ContextFormat::Yaml.to_string(), source.to_string(), reason)
        }
        other => other,
    })?;
    ContextData::from_value(value)
}
