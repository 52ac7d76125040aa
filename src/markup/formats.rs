//! Output formats for rendered messages
//!
//! - tag: XML-like markup, one block per line
//! - json: the serde representation of [RenderedMessage](super::RenderedMessage)

pub mod json;
pub mod registry;
pub mod tag;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{serialize_message as serialize_tag, TagFormatter};
