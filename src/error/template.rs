//! Rendering errors

use super::StacheError;

/// Creates a render failed error
pub fn render_failed(reason: impl Into<String>) -> StacheError {
    StacheError::RenderFailed {
        reason: reason.into(),
    }
}
