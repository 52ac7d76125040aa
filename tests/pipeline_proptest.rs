//! Property-based tests for the highlighting pipeline
//!
//! Inputs are built from analysis vocabulary so the generators hit dictionary
//! literals, label separators and brackets often, not just random code points.

use proptest::prelude::*;
use ziwei_markup::markup::preprocess::preprocess;
use ziwei_markup::markup::token::concat_text;
use ziwei_markup::markup::tokenizer::tokenize;
use ziwei_markup::markup::{
    Highlighter, TermCategory, TermDictionary, MAX_FOLLOW_UP_QUESTIONS,
};

const FRAGMENTS: &[&str] = &[
    "命宮", "紫微", "天府", "化忌", "武曲化忌", "化祿", "化權", "化科", "沖", "沖射", "→", "三奇加會",
    "三奇加會格", "火貪格", "機月同梁", "擎羊", "大耗", "紅色警報", "注意", "核心", "「", "」", "【",
    "】", "：", ":", "（大限）", "，", "。", " ", "\n", "*", "-", "##", "❓", "推薦追問", "abc", "⚠️",
];

/// Content lines that can never form a directive, bold marker or arrow
const SAFE_LINES: &[&str] = &[
    "命宮紫微，對宮貪狼化祿",
    "三奇加會格：吉",
    "「火貪格」 → 爆發",
    "結論：大限忌沖命",
    "財帛宮武曲化忌",
    "",
];

const DIRECTIVE_LINES: &[&str] = &[
    "角色: 首席戰略風控官",
    "角色：首席戰略風控官",
    "**角色:** **\"首席戰略風控官\"**",
    "Role: auditor",
    "[System Context] chart dump",
];

const INDENTS: &[&str] = &["", " ", "  ", "\t", "\u{3000}"];

fn vocabulary_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.concat())
}

/// Directive lines, optionally indented and wrapped in bold markers
fn directive_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(INDENTS),
        prop::sample::select(DIRECTIVE_LINES),
        any::<bool>(),
    )
        .prop_map(|(indent, line, bold)| {
            if bold {
                format!("{indent}**{line}**")
            } else {
                format!("{indent}{line}")
            }
        })
}

fn message_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(SAFE_LINES).prop_map(str::to_string),
            2 => directive_line(),
            1 => prop::sample::select(SAFE_LINES).prop_map(|line| format!("**{line}**")),
        ],
        0..12,
    )
}

proptest! {
    #[test]
    fn test_tokenizer_is_lossless(text in "\\PC*") {
        let dictionary = TermDictionary::builtin();
        prop_assert_eq!(concat_text(&tokenize(&dictionary, &text)), text);
    }

    #[test]
    fn test_tokenizer_is_lossless_on_vocabulary(text in vocabulary_text()) {
        let dictionary = TermDictionary::builtin();
        prop_assert_eq!(concat_text(&tokenize(&dictionary, &text)), text);
    }

    #[test]
    fn test_categorized_tokens_are_dictionary_literals(text in vocabulary_text()) {
        let dictionary = TermDictionary::builtin();
        for token in tokenize(&dictionary, &text) {
            if let Some(category) = token.category {
                prop_assert!(dictionary.contains(category, &token.text));
                prop_assert_eq!(
                    token.is_adverse.is_some(),
                    category == TermCategory::PatternName
                );
            }
        }
    }

    #[test]
    fn test_every_streamed_prefix_renders(text in vocabulary_text()) {
        let highlighter = Highlighter::default();
        for (end, _) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            let rendered = highlighter.render(&text[..end]);
            prop_assert!(rendered.questions.len() <= MAX_FOLLOW_UP_QUESTIONS);
        }
    }

    #[test]
    fn test_arbitrary_text_renders(text in "\\PC*") {
        let rendered = Highlighter::default().render(&text);
        prop_assert!(rendered.questions.len() <= MAX_FOLLOW_UP_QUESTIONS);
    }

    #[test]
    fn test_preprocessing_is_idempotent(lines in message_lines()) {
        let mut text = String::new();
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }

        let once = preprocess(&text);
        let twice = preprocess(&once.cleaned_text);
        prop_assert_eq!(&twice.cleaned_text, &once.cleaned_text);
        prop_assert!(!once.cleaned_text.contains("**"));
        prop_assert!(!once.cleaned_text.contains("[System Context]"));
        prop_assert!(!once.cleaned_text.contains("角色"));
        prop_assert!(!once.cleaned_text.contains("Role"));
    }
}
