//! Front matter read from a line stream

use std::io::BufRead;

use tracing::debug;

use super::{is_marker_line, parse_yaml};
use crate::context::Context;
use crate::error::{Result, StacheError, fs};

/// Read a front matter block from `reader` in a single forward pass.
///
/// Lines before the opening marker are skipped. Reading stops right after
/// the closing marker, and the reader is handed back positioned there. A
/// stream without any marker yields an empty context.
pub fn read_frontmatter_from_stream<R: BufRead>(mut reader: R) -> Result<(Context, R)> {
    let mut started = false;
    let mut frontmatter = String::new();
    let mut line = String::new();

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| fs::read_failed("<stdin>", e.to_string()))?;
        if read == 0 {
            if started {
                return Err(StacheError::UnterminatedFrontmatter);
            }
            break;
        }
        if is_marker_line(&line) {
            if started {
                break;
            }
            started = true;
            continue;
        }
        if started {
            frontmatter.push_str(&line);
        }
    }

    debug!(found = started, "read front matter from stream");
    let context = Context::from_value(parse_yaml(&frontmatter)?)?;
    Ok((context, reader))
}
