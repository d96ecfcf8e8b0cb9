//! Whole-text front matter extraction

use serde_json::Value;
use tracing::debug;

use super::{is_marker_line, parse_yaml};
use crate::context::Context;
use crate::error::{Result, StacheError};

/// Split `content` into a context and the remaining body.
///
/// With front matter, the block between the markers is the context and the
/// body is everything after the closing marker. Without front matter, a
/// `greedy` caller gets the whole text parsed as YAML and no body; otherwise
/// the context is empty and the body is `content` unchanged.
pub fn extract(content: &str, greedy: bool) -> Result<(Context, Option<&str>)> {
    let (value, body) = extract_value(content, greedy)?;
    Ok((Context::from_value(value)?, body))
}

/// Same as [`extract`], but returns the parsed document without requiring a
/// mapping, so a greedy context document may also be a list of rows.
pub fn extract_value(content: &str, greedy: bool) -> Result<(Value, Option<&str>)> {
    if let Some(rest) = strip_opening_marker(content) {
        let (frontmatter, body) =
            split_at_closing_marker(rest).ok_or(StacheError::UnterminatedFrontmatter)?;
        debug!(bytes = frontmatter.len(), "found front matter");
        return Ok((parse_yaml(frontmatter)?, Some(body)));
    }

    if greedy {
        return Ok((parse_yaml(content)?, None));
    }

    Ok((Value::Null, Some(content)))
}

fn strip_opening_marker(content: &str) -> Option<&str> {
    content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
}

/// Split at the first whole-line marker: (front matter, body after marker).
fn split_at_closing_marker(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_marker_line(line) {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
