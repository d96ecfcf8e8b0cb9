//! Command implementations for stache CLI

pub mod completions;
pub mod render;
