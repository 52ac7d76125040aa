//! Named output formats
//!
//! A [RenderedMessage] can be written out in several ways. Each way is a
//! [Formatter] stored under its name; the command-line front end picks one by
//! the `--format` value.

use crate::markup::highlighter::RenderedMessage;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter is registered under this name
    FormatNotFound(String),
    /// The formatter could not write the message
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Writes a rendered message as text.
pub trait Formatter: Send + Sync {
    /// Lookup key, e.g. `tag`
    fn name(&self) -> &str;

    fn serialize(&self, message: &RenderedMessage) -> Result<String, FormatError>;

    /// One-line summary for `list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order.
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formatters.
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// The `tag` and `json` formatters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry
    }

    /// Add a formatter. A later formatter with the same name wins.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        self.formatters.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|formatter| formatter.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, message: &RenderedMessage, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(message),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    /// Registered names in sorted order.
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
