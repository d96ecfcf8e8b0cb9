//! YAML front matter
//!
//! A front matter block starts the text with a line containing only `---`,
//! holds a YAML document, and ends with the next line containing only `---`.
//! Everything after the closing marker is the template body, verbatim.
//!
//! ```text
//! ---
//! names: [ {name: chris}, {name: mark}, {name: scott} ]
//! ---
//! {{#names}}Hi {{name}}!{{/names}}
//! ```
//!
//! Both the whole-text extractor and the line-stream reader treat an opened
//! but never closed block as an error.

mod extract;
mod stream;
mod yaml;

pub use extract::{extract, extract_value};
pub use stream::read_frontmatter_from_stream;
pub use yaml::parse_yaml;

/// Front matter delimiter, without its line terminator
pub const MARKER: &str = "---";

/// Whether `line` is a marker line. The terminator (`\n` or `\r\n`) is optional.
fn is_marker_line(line: &str) -> bool {
    let bare = line.strip_suffix('\n').unwrap_or(line);
    let bare = bare.strip_suffix('\r').unwrap_or(bare);
    bare == MARKER
}
