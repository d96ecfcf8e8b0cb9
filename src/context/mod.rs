//! Render context model
//!
//! A [`Context`] is the mapping of names to values handed to the renderer.
//! Context sources (front matter, JSON, YAML, CSV) are all normalized into
//! `serde_json` values so that one representation flows through merge,
//! fan-out and rendering.

pub mod format;
pub mod loader;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, context};

/// String-keyed mapping of arbitrary nested values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context(Map<String, Value>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a parsed value.
    ///
    /// `null` (an empty document) becomes an empty context. Anything other
    /// than a mapping is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(context::not_mapping(describe(&other))),
        }
    }

    /// Shallow, right-biased merge: keys of `other` replace keys of `self`.
    pub fn merge(&mut self, other: Context) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Return a copy of `self` with `other` merged over it.
    pub fn merged_with(&self, other: Context) -> Context {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A loaded context source: one mapping, or one mapping per row
#[derive(Debug, Clone, PartialEq)]
pub enum ContextData {
    Single(Context),
    Rows(Vec<Context>),
}

impl ContextData {
    /// Classify a parsed JSON/YAML document.
    ///
    /// A list is accepted only when every element is a mapping (or null).
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(Context::from_value)
                .collect::<Result<Vec<_>>>()
                .map(ContextData::Rows),
            other => Context::from_value(other).map(ContextData::Single),
        }
    }
}

/// Short description of a value's kind for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(_) => "a string".to_string(),
        Value::Array(_) => "a list".to_string(),
        Value::Object(_) => "a mapping".to_string(),
    }
}

/// Render a scalar value as plain text; `None` for lists, mappings and null.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
