//! Label-Pair Parser
//!
//! Analysis text presents one finding per line as `label：content`. A run that
//! starts with such a line is emitted as one label token followed by the
//! tokens of the content. Anything else goes to the bracket-phrase parser.
//!
//! Label shape:
//!
//!     - 2 to 10 characters, no newline and no colon
//!     - followed by a full-width or half-width colon
//!     - not exactly a flow keyword (`沖：` is a sentence, not a label)
//!
//! Label category, first match wins:
//!
//!     1. label without its parenthetical qualifier is a whitelisted pattern
//!     2. raw label contains a risk ideogram (忌 沖 煞 刑)
//!     3. label is at most 8 characters and ends with 格 or 局
//!     4. otherwise a generic label
//!
//! Content and any following lines are parsed again from the top, so a run of
//! several label lines yields several label tokens. Every recursive call works
//! on a strictly shorter slice.

use super::bracket;
use super::dictionary::TermDictionary;
use super::token::{extend_merged, push_plain, TermCategory, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static LABEL_PAIR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\n：:]{2,10})[：:]\s*(.*)").unwrap());

static PARENTHETICAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[（(].*?[)）]").unwrap());

/// Labels this long or longer are never treated as labels.
pub const MAX_LABEL_CHARS: usize = 20;

/// Longest label the suffix heuristic accepts.
pub const MAX_SUFFIX_LABEL_CHARS: usize = 8;

/// A matched `label：content` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPair<'a> {
    /// Trimmed label text
    pub label: &'a str,
    /// Rest of the line after the separator and any whitespace
    pub content: &'a str,
    /// Remaining lines of the run, starting at a newline (or empty)
    pub remainder: &'a str,
}

/// Match a label pair at the start of `text`.
pub fn match_label_pair<'a>(dictionary: &TermDictionary, text: &'a str) -> Option<LabelPair<'a>> {
    let captures = LABEL_PAIR_REGEX.captures(text)?;
    let raw_label = captures.get(1)?.as_str();
    let content = captures.get(2)?;

    if dictionary.contains(TermCategory::Flow, raw_label)
        || raw_label.chars().count() >= MAX_LABEL_CHARS
    {
        return None;
    }

    let label = raw_label.trim();
    if label.is_empty() {
        return None;
    }

    Some(LabelPair {
        label,
        content: content.as_str(),
        remainder: &text[content.end()..],
    })
}

/// Resolve the token for a label.
pub fn classify_label(dictionary: &TermDictionary, label: &str) -> Token {
    let stripped = PARENTHETICAL_REGEX.replace_all(label, "");
    let stripped = stripped.trim();

    let is_pattern = dictionary.is_pattern(stripped)
        || dictionary.has_label_risk(label)
        || (label.chars().count() <= MAX_SUFFIX_LABEL_CHARS
            && dictionary.ends_with_pattern_suffix(label));

    if is_pattern {
        // Looks up the adverse set without the qualifier, so `火貪格（大限）` is
        // adverse. Checking the raw label alone would report it favorable.
        let adverse = dictionary.in_adverse_set(stripped) || dictionary.is_adverse_pattern(label);
        Token::pattern(label, adverse)
    } else {
        Token::term(label, TermCategory::Label)
    }
}

/// Parse a text run, recognizing a leading label pair.
pub fn parse(dictionary: &TermDictionary, text: &str) -> Vec<Token> {
    let Some(pair) = match_label_pair(dictionary, text) else {
        return bracket::parse(dictionary, text);
    };

    let mut tokens = vec![classify_label(dictionary, pair.label)];
    extend_merged(&mut tokens, parse(dictionary, pair.content));

    if let Some(next_lines) = pair.remainder.strip_prefix('\n') {
        push_plain(&mut tokens, "\n");
        extend_merged(&mut tokens, parse(dictionary, next_lines));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_full_width_colon() {
        let dictionary = TermDictionary::builtin();
        let pair = match_label_pair(&dictionary, "事業宮：  主動盪").unwrap();
        assert_eq!(pair.label, "事業宮");
        assert_eq!(pair.content, "主動盪");
        assert_eq!(pair.remainder, "");
    }

    #[test]
    fn test_match_half_width_colon_and_remainder() {
        let dictionary = TermDictionary::builtin();
        let pair = match_label_pair(&dictionary, "Note: 第一行\n第二行").unwrap();
        assert_eq!(pair.label, "Note");
        assert_eq!(pair.content, "第一行");
        assert_eq!(pair.remainder, "\n第二行");
    }

    #[test]
    fn test_rejects_long_short_and_flow_labels() {
        let dictionary = TermDictionary::builtin();
        assert!(match_label_pair(&dictionary, "這是一個超過十個字的很長標籤：內容").is_none());
        assert!(match_label_pair(&dictionary, "命：內容").is_none());
        assert!(match_label_pair(&dictionary, "沖射：遷移宮").is_none());
        assert!(match_label_pair(&dictionary, "沒有分隔符號").is_none());
    }

    #[test]
    fn test_classify_whitelisted_label_with_qualifier() {
        let dictionary = TermDictionary::builtin();
        assert_eq!(
            classify_label(&dictionary, "馬頭帶劍(大限)"),
            Token::pattern("馬頭帶劍(大限)", true)
        );
        assert_eq!(
            classify_label(&dictionary, "三奇加會格（本命）"),
            Token::pattern("三奇加會格（本命）", false)
        );
    }

    #[test]
    fn test_classify_risk_ideogram_label() {
        let dictionary = TermDictionary::builtin();
        assert_eq!(
            classify_label(&dictionary, "大限忌沖命"),
            Token::pattern("大限忌沖命", true)
        );
        // 刑 makes it a pattern but is not one of the adverse ideograms
        assert_eq!(
            classify_label(&dictionary, "刑囚之象"),
            Token::pattern("刑囚之象", false)
        );
    }

    #[test]
    fn test_classify_suffix_label() {
        let dictionary = TermDictionary::builtin();
        assert_eq!(
            classify_label(&dictionary, "自創新詞格"),
            Token::pattern("自創新詞格", false)
        );
        assert_eq!(
            classify_label(&dictionary, "九個字的超長自訂格"),
            Token::term("九個字的超長自訂格", TermCategory::Label)
        );
    }

    #[test]
    fn test_classify_generic_label() {
        let dictionary = TermDictionary::builtin();
        assert_eq!(
            classify_label(&dictionary, "戰略建議"),
            Token::term("戰略建議", TermCategory::Label)
        );
    }

    #[test]
    fn test_parse_pattern_label_with_content() {
        let dictionary = TermDictionary::builtin();
        let tokens = parse(&dictionary, "三奇加會格：命宮三方四正齊聚");
        assert_eq!(tokens[0], Token::pattern("三奇加會格", false));
        assert_eq!(tokens[1..], [Token::plain("命宮三方四正齊聚")]);
    }

    #[test]
    fn test_parse_multiple_label_lines() {
        let dictionary = TermDictionary::builtin();
        let tokens = parse(&dictionary, "風險：化忌\n機會：化祿");
        assert_eq!(
            tokens,
            vec![
                Token::term("風險", TermCategory::Label),
                Token::term("化忌", TermCategory::Debt),
                Token::plain("\n"),
                Token::term("機會", TermCategory::Label),
                Token::term("化祿", TermCategory::Opportunity),
            ]
        );
    }

    #[test]
    fn test_parse_without_label_defers() {
        let dictionary = TermDictionary::builtin();
        let tokens = parse(&dictionary, "「三奇加會格」");
        assert_eq!(tokens, vec![Token::pattern("三奇加會格", false)]);
    }
}
