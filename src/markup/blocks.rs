//! Markdown block splitting.
//!
//! The cleaned body is CommonMark. Blocks are read with comrak and flattened
//! into a list of [Block]s. Only the direct text of paragraphs and list items
//! is highlighted; heading text, inline code, emphasis and link text are kept
//! as plain strings. Each soft-break separated line of a paragraph is its own
//! text run, so every line gets its own chance at a label pair.

use super::dictionary::TermDictionary;
use super::label_pair;
use super::token::Token;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use serde::Serialize;

/// A block-level unit of a rendered message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { inlines: Vec<Inline> },
    /// List item content; `depth` is 0 for top-level items
    ListItem { depth: usize, inlines: Vec<Inline> },
    CodeBlock { info: String, literal: String },
    Rule,
}

/// Inline content of a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Inline {
    /// A highlighted text run
    Tokens(Vec<Token>),
    Emphasis(String),
    Strong(String),
    Code(String),
    Link { text: String, url: String },
    /// Text that is shown as is
    Plain(String),
    Break,
}

impl Inline {
    /// Whether this inline shows anything besides whitespace.
    fn is_visible(&self) -> bool {
        match self {
            Inline::Tokens(tokens) => tokens.iter().any(|t| !t.text.trim().is_empty()),
            Inline::Emphasis(text) | Inline::Strong(text) | Inline::Code(text) => {
                !text.trim().is_empty()
            }
            Inline::Plain(text) => !text.trim().is_empty(),
            Inline::Link { .. } => true,
            Inline::Break => false,
        }
    }
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Split a cleaned message body into highlighted blocks.
pub fn split_blocks(dictionary: &TermDictionary, markdown: &str) -> Vec<Block> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let mut blocks = Vec::new();
    collect_blocks(dictionary, root, 0, &mut blocks);
    blocks
}

fn collect_blocks<'a>(
    dictionary: &TermDictionary,
    node: &'a AstNode<'a>,
    depth: usize,
    blocks: &mut Vec<Block>,
) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Document | NodeValue::BlockQuote | NodeValue::List(_) => {
            for child in node.children() {
                collect_blocks(dictionary, child, depth, blocks);
            }
        }

        NodeValue::Item(_) => {
            let mut inlines = Vec::new();
            let mut nested = Vec::new();

            for child in node.children() {
                if matches!(child.data.borrow().value, NodeValue::Paragraph) {
                    if !inlines.is_empty() {
                        inlines.push(Inline::Break);
                    }
                    inlines.extend(collect_inlines(dictionary, child));
                } else {
                    collect_blocks(dictionary, child, depth + 1, &mut nested);
                }
            }

            // Items with nothing to show are dropped, their sublists are not
            if inlines.iter().any(Inline::is_visible) {
                blocks.push(Block::ListItem { depth, inlines });
            }
            blocks.extend(nested);
        }

        NodeValue::Paragraph => {
            let inlines = collect_inlines(dictionary, node);
            if !inlines.is_empty() {
                blocks.push(Block::Paragraph { inlines });
            }
        }

        NodeValue::Heading(heading) => {
            blocks.push(Block::Heading {
                level: heading.level,
                text: plain_text(node),
            });
        }

        NodeValue::CodeBlock(code_block) => {
            blocks.push(Block::CodeBlock {
                info: code_block.info.clone(),
                literal: code_block.literal.clone(),
            });
        }

        NodeValue::ThematicBreak => blocks.push(Block::Rule),

        _ => {
            // HTML blocks and other constructs are not rendered
        }
    }
}

fn collect_inlines<'a>(dictionary: &TermDictionary, node: &'a AstNode<'a>) -> Vec<Inline> {
    let mut inlines = Vec::new();

    for child in node.children() {
        let child_data = child.data.borrow();
        let inline = match &child_data.value {
            NodeValue::Text(text) => Inline::Tokens(label_pair::parse(dictionary, text)),
            NodeValue::SoftBreak | NodeValue::LineBreak => Inline::Break,
            NodeValue::Code(code) => Inline::Code(code.literal.clone()),
            NodeValue::Emph => Inline::Emphasis(plain_text(child)),
            NodeValue::Strong => Inline::Strong(plain_text(child)),
            NodeValue::Link(link) => Inline::Link {
                text: plain_text(child),
                url: link.url.clone(),
            },
            NodeValue::HtmlInline(html) => Inline::Plain(html.clone()),
            _ => Inline::Plain(plain_text(child)),
        };
        inlines.push(inline);
    }

    inlines
}

/// Concatenated text of a node's descendants.
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::token::TermCategory;

    fn tokens_of(inline: &Inline) -> &[Token] {
        match inline {
            Inline::Tokens(tokens) => tokens,
            other => panic!("expected tokens, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_document() {
        let dictionary = TermDictionary::builtin();
        assert!(split_blocks(&dictionary, "").is_empty());
    }

    #[test]
    fn test_heading_is_not_highlighted() {
        let dictionary = TermDictionary::builtin();
        let blocks = split_blocks(&dictionary, "### 紫微在命");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 3,
                text: "紫微在命".to_string()
            }]
        );
    }

    #[test]
    fn test_paragraph_lines_are_separate_runs() {
        let dictionary = TermDictionary::builtin();
        let blocks = split_blocks(&dictionary, "風險：化忌\n機會：化祿");
        let Block::Paragraph { inlines } = &blocks[0] else {
            panic!("expected paragraph");
        };

        assert_eq!(inlines.len(), 3);
        assert_eq!(
            tokens_of(&inlines[0])[0],
            Token::term("風險", TermCategory::Label)
        );
        assert_eq!(inlines[1], Inline::Break);
        assert_eq!(
            tokens_of(&inlines[2])[1],
            Token::term("化祿", TermCategory::Opportunity)
        );
    }

    #[test]
    fn test_list_items_with_depth() {
        let dictionary = TermDictionary::builtin();
        let markdown = "* 三奇加會格：吉\n  * 天馬同宮\n* 第二項";
        let blocks = split_blocks(&dictionary, markdown);

        let depths: Vec<usize> = blocks
            .iter()
            .map(|block| match block {
                Block::ListItem { depth, .. } => *depth,
                other => panic!("expected list item, got {other:?}"),
            })
            .collect();
        assert_eq!(depths, vec![0, 1, 0]);

        let Block::ListItem { inlines, .. } = &blocks[0] else {
            unreachable!()
        };
        assert_eq!(
            tokens_of(&inlines[0])[0],
            Token::pattern("三奇加會格", false)
        );
    }

    #[test]
    fn test_inline_markup_stays_plain() {
        let dictionary = TermDictionary::builtin();
        let blocks = split_blocks(&dictionary, "見 *擎羊* 與 `化忌`");
        let Block::Paragraph { inlines } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(inlines.contains(&Inline::Emphasis("擎羊".to_string())));
        assert!(inlines.contains(&Inline::Code("化忌".to_string())));
    }

    #[test]
    fn test_rule_and_code_block() {
        let dictionary = TermDictionary::builtin();
        let blocks = split_blocks(&dictionary, "前文\n\n---\n\n```\n化忌\n```");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], Block::Rule);
        assert_eq!(
            blocks[2],
            Block::CodeBlock {
                info: String::new(),
                literal: "化忌\n".to_string()
            }
        );
    }
}
