//! Question Extractor
//!
//! Turns the block that follows the follow-up heading into a list of plain
//! questions. Only bulleted lines count (`*`, `-`, or `❖`); the bullet and
//! surrounding whitespace are removed, and fragments of two characters or
//! fewer are dropped as noise from a half-streamed line.

use once_cell::sync::Lazy;
use regex::Regex;

/// How many follow-up questions a caller should display at most.
pub const MAX_FOLLOW_UP_QUESTIONS: usize = 5;

const BULLETS: [char; 3] = ['*', '❖', '-'];

static BULLET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[*\-❖]\s*").unwrap());

/// Extract the questions of a follow-up block, in order.
pub fn extract_questions(block: &str) -> Vec<String> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with(BULLETS))
        .map(|line| BULLET_REGEX.replace(line, "").trim().to_string())
        .filter(|question| question.chars().count() > 2)
        .collect()
}
