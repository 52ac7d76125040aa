//! Bracket-Phrase Parser
//!
//! Corner brackets 「...」 and black lenticular brackets 【...】 mark emphasis
//! or named configurations. A bracketed phrase whose inner text is a
//! whitelisted pattern name becomes a pattern token (delimiters dropped);
//! any other phrase becomes a bracket-phrase token with its delimiters kept.
//!
//! Membership is strict here: a phrase like 「自創新詞格」 stays a plain
//! bracket phrase even though the label-pair heuristics would accept the
//! same text as a pattern label.
//!
//! Text outside brackets goes to the master tokenizer.

use super::dictionary::TermDictionary;
use super::token::{extend_merged, TermCategory, Token};
use super::tokenizer;
use once_cell::sync::Lazy;
use regex::Regex;

/// Either opening bracket, at least one non-closing character, either
/// closing bracket.
static BRACKET_PHRASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[「【][^」】]+[」】]").unwrap());

const DELIMITERS: [char; 4] = ['「', '」', '【', '】'];

/// Parse a text run, recognizing bracketed phrases.
pub fn parse(dictionary: &TermDictionary, text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for phrase in BRACKET_PHRASE_REGEX.find_iter(text) {
        if phrase.start() > last {
            extend_merged(
                &mut tokens,
                tokenizer::tokenize(dictionary, &text[last..phrase.start()]),
            );
        }
        tokens.push(classify_phrase(dictionary, phrase.as_str()));
        last = phrase.end();
    }

    if last < text.len() {
        extend_merged(&mut tokens, tokenizer::tokenize(dictionary, &text[last..]));
    }

    tokens
}

/// Resolve the token for one delimited phrase.
pub fn classify_phrase(dictionary: &TermDictionary, phrase: &str) -> Token {
    let inner: String = phrase.chars().filter(|c| !DELIMITERS.contains(c)).collect();
    let inner = inner.trim();

    if dictionary.is_pattern(inner) {
        Token::pattern(inner, dictionary.is_adverse_pattern(inner))
    } else {
        Token::term(phrase, TermCategory::BracketPhrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelisted_phrase() {
        let dictionary = TermDictionary::builtin();
        assert_eq!(
            parse(&dictionary, "「三奇加會格」"),
            vec![Token::pattern("三奇加會格", false)]
        );
        assert_eq!(
            parse(&dictionary, "【 鈴昌羅紋 】"),
            vec![Token::pattern("鈴昌羅紋", true)]
        );
    }

    #[test]
    fn test_unlisted_phrase_is_emphasis() {
        let dictionary = TermDictionary::builtin();
        assert_eq!(
            parse(&dictionary, "「自創新詞格」"),
            vec![Token::term("「自創新詞格」", TermCategory::BracketPhrase)]
        );
    }

    #[test]
    fn test_surrounding_text_is_tokenized() {
        let dictionary = TermDictionary::builtin();
        let tokens = parse(&dictionary, "命宮見【幾何結構】，擎羊同度");
        assert_eq!(
            tokens,
            vec![
                Token::plain("命宮見"),
                Token::term("【幾何結構】", TermCategory::BracketPhrase),
                Token::plain("，"),
                Token::term("擎羊", TermCategory::AdverseStar),
                Token::plain("同度"),
            ]
        );
    }

    #[test]
    fn test_mixed_delimiters_pair_up() {
        let dictionary = TermDictionary::builtin();
        assert_eq!(
            parse(&dictionary, "「火貪格】"),
            vec![Token::pattern("火貪格", true)]
        );
    }

    #[test]
    fn test_unterminated_bracket_falls_through() {
        let dictionary = TermDictionary::builtin();
        let tokens = parse(&dictionary, "「三奇加會");
        assert_eq!(
            tokens,
            vec![
                Token::term("「", TermCategory::BracketGlyph),
                Token::pattern("三奇加會", false),
            ]
        );
    }

    #[test]
    fn test_empty_brackets_are_glyphs() {
        let dictionary = TermDictionary::builtin();
        let tokens = parse(&dictionary, "「」");
        assert_eq!(
            tokens,
            vec![
                Token::term("「", TermCategory::BracketGlyph),
                Token::term("」", TermCategory::BracketGlyph),
            ]
        );
    }
}
