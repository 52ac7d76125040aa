//! Token types produced by the highlighting pipeline.
//!
//!     A token is a slice of the source text plus an optional category. Tokens
//!     without a category are literal passthrough. Pattern-name tokens also
//!     carry an adverse flag so the presentation layer can tell auspicious and
//!     inauspicious configurations apart.

use serde::{Deserialize, Serialize};

/// Semantic category of a recognized span.
///
/// The first sixteen variants are dictionary categories. `Label` and
/// `BracketPhrase` are only produced by the label-pair and bracket-phrase
/// parsers and never hold dictionary literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TermCategory {
    /// 化忌 and its star-qualified forms
    Debt,
    /// 化祿
    Opportunity,
    /// 化權
    Authority,
    /// 化科
    Reputation,
    AdverseStar,
    FavorableStar,
    RomanceStar,
    ImperialStar,
    ActionStar,
    IntellectStar,
    DarkStar,
    Flow,
    Warning,
    Verdict,
    BracketGlyph,
    PatternName,
    /// Generic label of a label-pair line
    Label,
    /// Bracketed phrase that is not a known pattern name
    BracketPhrase,
}

impl TermCategory {
    /// Star subtypes in classification priority order.
    pub const STAR_PRECEDENCE: [TermCategory; 11] = [
        TermCategory::Debt,
        TermCategory::Opportunity,
        TermCategory::Authority,
        TermCategory::Reputation,
        TermCategory::RomanceStar,
        TermCategory::ImperialStar,
        TermCategory::ActionStar,
        TermCategory::IntellectStar,
        TermCategory::DarkStar,
        TermCategory::AdverseStar,
        TermCategory::FavorableStar,
    ];

    /// Every non-pattern dictionary category, in the order a matched literal
    /// is checked against them.
    ///
    /// Pattern names are checked before all of these. Swapping any two entries
    /// changes which category wins for literals listed more than once.
    pub const CLASSIFICATION_ORDER: [TermCategory; 15] = [
        TermCategory::Flow,
        TermCategory::Warning,
        TermCategory::Verdict,
        TermCategory::Debt,
        TermCategory::Opportunity,
        TermCategory::Authority,
        TermCategory::Reputation,
        TermCategory::RomanceStar,
        TermCategory::ImperialStar,
        TermCategory::ActionStar,
        TermCategory::IntellectStar,
        TermCategory::DarkStar,
        TermCategory::AdverseStar,
        TermCategory::FavorableStar,
        TermCategory::BracketGlyph,
    ];

    /// The camelCase name used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            TermCategory::Debt => "debt",
            TermCategory::Opportunity => "opportunity",
            TermCategory::Authority => "authority",
            TermCategory::Reputation => "reputation",
            TermCategory::AdverseStar => "adverseStar",
            TermCategory::FavorableStar => "favorableStar",
            TermCategory::RomanceStar => "romanceStar",
            TermCategory::ImperialStar => "imperialStar",
            TermCategory::ActionStar => "actionStar",
            TermCategory::IntellectStar => "intellectStar",
            TermCategory::DarkStar => "darkStar",
            TermCategory::Flow => "flow",
            TermCategory::Warning => "warning",
            TermCategory::Verdict => "verdict",
            TermCategory::BracketGlyph => "bracketGlyph",
            TermCategory::PatternName => "patternName",
            TermCategory::Label => "label",
            TermCategory::BracketPhrase => "bracketPhrase",
        }
    }
}

/// A classified (or passthrough) span of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub text: String,
    pub category: Option<TermCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_adverse: Option<bool>,
}

impl Token {
    /// Literal passthrough text.
    pub fn plain(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            category: None,
            is_adverse: None,
        }
    }

    /// A span tagged with a non-pattern category.
    pub fn term(text: impl Into<String>, category: TermCategory) -> Self {
        Token {
            text: text.into(),
            category: Some(category),
            is_adverse: None,
        }
    }

    /// A named chart configuration.
    pub fn pattern(text: impl Into<String>, adverse: bool) -> Self {
        Token {
            text: text.into(),
            category: Some(TermCategory::PatternName),
            is_adverse: Some(adverse),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.category.is_none()
    }
}

/// Concatenate the text of a token sequence.
pub fn concat_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Append passthrough text, merging into a trailing passthrough token.
pub(crate) fn push_plain(tokens: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(last) if last.is_plain() => last.text.push_str(text),
        _ => tokens.push(Token::plain(text)),
    }
}

/// Append a token sequence, keeping adjacent passthrough runs merged.
pub(crate) fn extend_merged(tokens: &mut Vec<Token>, more: Vec<Token>) {
    for token in more {
        if token.is_plain() {
            push_plain(tokens, &token.text);
        } else {
            tokens.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_plain_merges() {
        let mut tokens = vec![Token::plain("命宮")];
        push_plain(&mut tokens, "坐");
        assert_eq!(tokens, vec![Token::plain("命宮坐")]);

        tokens.push(Token::term("紫微", TermCategory::ImperialStar));
        push_plain(&mut tokens, "，");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_push_plain_ignores_empty() {
        let mut tokens = Vec::new();
        push_plain(&mut tokens, "");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Token::pattern("火貪格", true)).unwrap();
        assert_eq!(
            json,
            r#"{"text":"火貪格","category":"patternName","isAdverse":true}"#
        );

        let json = serde_json::to_string(&Token::plain("，")).unwrap();
        assert_eq!(json, r#"{"text":"，","category":null}"#);
    }

    #[test]
    fn test_star_precedence_inside_classification_order() {
        assert_eq!(
            TermCategory::CLASSIFICATION_ORDER[3..14],
            TermCategory::STAR_PRECEDENCE
        );
    }

    #[test]
    fn test_category_names_match_serde() {
        for category in TermCategory::CLASSIFICATION_ORDER {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.name()));
        }
    }
}
