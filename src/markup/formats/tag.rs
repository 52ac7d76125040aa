//! XML-like tag serialization
//!
//! Every block is one line; categorized tokens become elements named after
//! their category and passthrough text is written escaped.
//!
//! ```text
//! <message>
//!   <heading level="2">格局掃描</heading>
//!   <item depth="0"><patternName adverse="false">三奇加會格</patternName>：<opportunity>化祿</opportunity></item>
//!   <question>十年大運如何</question>
//! </message>
//! ```

use super::registry::{FormatError, Formatter};
use crate::markup::blocks::{Block, Inline};
use crate::markup::highlighter::RenderedMessage;
use crate::markup::token::Token;

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, message: &RenderedMessage) -> Result<String, FormatError> {
        Ok(serialize_message(message))
    }

    fn description(&self) -> &str {
        "XML-like tagged text"
    }
}

/// Serialize a rendered message to tag format
pub fn serialize_message(message: &RenderedMessage) -> String {
    let mut output = String::from("<message>\n");
    for block in &message.blocks {
        serialize_block(block, &mut output);
    }
    for question in &message.questions {
        output.push_str(&format!("  <question>{}</question>\n", escape_xml(question)));
    }
    output.push_str("</message>");
    output
}

fn serialize_block(block: &Block, output: &mut String) {
    match block {
        Block::Heading { level, text } => {
            output.push_str(&format!(
                "  <heading level=\"{level}\">{}</heading>\n",
                escape_xml(text)
            ));
        }
        Block::Paragraph { inlines } => {
            output.push_str("  <paragraph>");
            serialize_inlines(inlines, output);
            output.push_str("</paragraph>\n");
        }
        Block::ListItem { depth, inlines } => {
            let indent = "  ".repeat(depth + 1);
            output.push_str(&format!("{indent}<item depth=\"{depth}\">"));
            serialize_inlines(inlines, output);
            output.push_str("</item>\n");
        }
        Block::CodeBlock { info, literal } => {
            output.push_str(&format!(
                "  <code-block info=\"{}\">{}</code-block>\n",
                escape_xml(info),
                escape_xml(literal)
            ));
        }
        Block::Rule => output.push_str("  <rule/>\n"),
    }
}

fn serialize_inlines(inlines: &[Inline], output: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Tokens(tokens) => {
                for token in tokens {
                    serialize_token(token, output);
                }
            }
            Inline::Emphasis(text) => wrap("em", text, output),
            Inline::Strong(text) => wrap("strong", text, output),
            Inline::Code(text) => wrap("code", text, output),
            Inline::Link { text, url } => {
                output.push_str(&format!(
                    "<link url=\"{}\">{}</link>",
                    escape_xml(url),
                    escape_xml(text)
                ));
            }
            Inline::Plain(text) => output.push_str(&escape_xml(text)),
            Inline::Break => output.push_str("<br/>"),
        }
    }
}

fn serialize_token(token: &Token, output: &mut String) {
    match (token.category, token.is_adverse) {
        (None, _) => output.push_str(&escape_xml(&token.text)),
        (Some(category), Some(adverse)) => {
            let name = category.name();
            output.push_str(&format!(
                "<{name} adverse=\"{adverse}\">{}</{name}>",
                escape_xml(&token.text)
            ));
        }
        (Some(category), None) => wrap(category.name(), &token.text, output),
    }
}

fn wrap(tag: &str, text: &str, output: &mut String) {
    output.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(text)));
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
