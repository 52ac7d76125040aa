//! Master Tokenizer
//!
//! Splits a text run into dictionary literals and passthrough text in a single
//! left-to-right scan. At each position the longest dictionary literal wins;
//! characters that start no literal accumulate into a passthrough token.
//!
//! The output is lossless: concatenating the token texts gives back the input.
//! A literal cut off at the end of a streamed prefix simply fails to match and
//! is emitted as passthrough until the rest of it arrives.

use super::dictionary::TermDictionary;
use super::token::{TermCategory, Token};
use tracing::trace;

/// Tokenize a text run against the dictionary.
pub fn tokenize(dictionary: &TermDictionary, text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        match dictionary.longest_match(rest) {
            Some(len) => {
                if plain_start < pos {
                    tokens.push(Token::plain(&text[plain_start..pos]));
                }
                tokens.push(classify(dictionary, &rest[..len]));
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        tokens.push(Token::plain(&text[plain_start..]));
    }

    trace!(bytes = text.len(), tokens = tokens.len(), "tokenized run");
    tokens
}

/// Classify an isolated literal.
///
/// Order:
/// 1. Pattern whitelist (with adverse flag)
/// 2. Flow, warning, verdict keywords
/// 3. Star subtypes, see [TermCategory::STAR_PRECEDENCE]
/// 4. Bracket glyphs
/// 5. Passthrough
pub fn classify(dictionary: &TermDictionary, literal: &str) -> Token {
    if dictionary.is_pattern(literal) {
        return Token::pattern(literal, dictionary.is_adverse_pattern(literal));
    }

    TermCategory::CLASSIFICATION_ORDER
        .into_iter()
        .find(|&category| dictionary.contains(category, literal))
        .map_or_else(
            || Token::plain(literal),
            |category| Token::term(literal, category),
        )
}
