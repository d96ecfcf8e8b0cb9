//! Template rendering
//!
//! The template language itself lives behind [`Renderer`]; the production
//! implementation is the `mustache` crate.

use crate::context::Context;
use crate::error::{Result, template};

/// Renders a template body with a context
pub trait Renderer {
    fn render(&self, template: &str, context: &Context) -> Result<String>;
}

/// Renderer backed by the `mustache` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct MustacheRenderer;

impl Renderer for MustacheRenderer {
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        let compiled = mustache::compile_str(template)?;
        let mut out = Vec::new();
        compiled.render(&mut out, context)?;
        String::from_utf8(out).map_err(|e| template::render_failed(e.to_string()))
    }
}
