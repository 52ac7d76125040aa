//! JSON serialization of rendered messages

use super::registry::{FormatError, Formatter};
use crate::markup::highlighter::RenderedMessage;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, message: &RenderedMessage) -> Result<String, FormatError> {
        serde_json::to_string_pretty(message)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Blocks, tokens and questions as JSON"
    }
}
