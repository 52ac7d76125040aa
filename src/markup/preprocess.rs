//! Text Preprocessor
//!
//! Cleans a raw analysis message before it is split into blocks:
//!
//!     1. drop a leading `**【系統設定:` / `**【System Upgrade:` directive line
//!        (the line break itself stays)
//!     2. drop every `角色:` / `Role:` line, line break included, also when
//!        the marker is indented or wrapped in `**`
//!     3. drop every `[System Context]` block, line break included
//!     4. remove `**` bold markers, keeping the enclosed text
//!     5. replace `->` with `→`
//!     6. split at the follow-up heading (`## ❓ 推薦追問` or
//!        `## ❓ Recommended Follow-up`)
//!
//! The text before the heading, trimmed, is the cleaned body; the block after
//! it goes to the [question extractor](super::questions). Steps 1 to 3 only
//! remove text that ends in a line break, so a directive still streaming in
//! stays visible until its line completes.

use super::config::{ConfigError, DictionaryConfig};
use super::questions::{extract_questions, MAX_FOLLOW_UP_QUESTIONS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

static LEADING_DIRECTIVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\*\*【(?:System Upgrade|系統設定)[:：][^\n]*\n").unwrap());

// Must also match lines that only become role lines after trimming and bold removal
static ROLE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^\S\n]*(?:\*\*[^\S\n]*)*(?:Role|角色)(?:\*\*)*[:：][^\n]*\n").unwrap()
});

static SYSTEM_CONTEXT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[System Context\][^\n]*\n").unwrap());

static DEFAULT_QUESTION_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    let labels = DictionaryConfig::default().question_headers;
    Regex::new(&question_header_pattern(&labels)).unwrap()
});

const BOLD_MARKER: &str = "**";
const ASCII_ARROW: &str = "->";
const ARROW: &str = "→";

/// Cleaned message body plus the follow-up questions found after it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub cleaned_text: String,
    pub extracted_questions: Vec<String>,
}

impl ExtractionResult {
    /// The questions a caller should display, capped at
    /// [MAX_FOLLOW_UP_QUESTIONS].
    pub fn top_questions(&self) -> &[String] {
        let end = self.extracted_questions.len().min(MAX_FOLLOW_UP_QUESTIONS);
        &self.extracted_questions[..end]
    }
}

#[derive(Debug, Clone)]
pub struct Preprocessor {
    question_header: Option<Regex>,
}

impl Preprocessor {
    /// Build a preprocessor recognizing the given heading labels. With no
    /// labels, no question block is ever split off.
    pub fn new<S: AsRef<str>>(header_labels: &[S]) -> Result<Self, ConfigError> {
        if header_labels.is_empty() {
            return Ok(Preprocessor {
                question_header: None,
            });
        }
        let pattern = question_header_pattern(header_labels);
        let question_header =
            Regex::new(&pattern).map_err(|e| ConfigError::InvalidHeader(e.to_string()))?;
        Ok(Preprocessor {
            question_header: Some(question_header),
        })
    }

    pub fn from_config(config: &DictionaryConfig) -> Result<Self, ConfigError> {
        Self::new(&config.question_headers)
    }

    /// Clean a raw message and extract its follow-up questions.
    pub fn process(&self, text: &str) -> ExtractionResult {
        if text.is_empty() {
            return ExtractionResult::default();
        }

        let stripped = strip_directives(text);

        let (body, block) = match &self.question_header {
            Some(header) => {
                let mut parts = header.splitn(&stripped, 3);
                let body = parts.next().unwrap_or_default();
                (body, parts.next())
            }
            None => (stripped.as_str(), None),
        };

        let extracted_questions = block.map(extract_questions).unwrap_or_default();
        if !extracted_questions.is_empty() {
            debug!(count = extracted_questions.len(), "extracted follow-up questions");
        }

        ExtractionResult {
            cleaned_text: body.trim().to_string(),
            extracted_questions,
        }
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Preprocessor {
            question_header: Some(DEFAULT_QUESTION_HEADER_REGEX.clone()),
        }
    }
}

/// Steps 1 to 5: remove directives and bold markers, normalize arrows.
pub fn strip_directives(text: &str) -> String {
    let text = LEADING_DIRECTIVE_REGEX.replace(text, "\n");
    let text = ROLE_LINE_REGEX.replace_all(&text, "");
    let text = SYSTEM_CONTEXT_REGEX.replace_all(&text, "");
    text.replace(BOLD_MARKER, "").replace(ASCII_ARROW, ARROW)
}

/// Run the default preprocessor.
pub fn preprocess(text: &str) -> ExtractionResult {
    Preprocessor::default().process(text)
}

fn question_header_pattern<S: AsRef<str>>(labels: &[S]) -> String {
    let alternatives: Vec<String> = labels
        .iter()
        .map(|label| format!(r"##\s*❓\s*{}", regex::escape(label.as_ref())))
        .collect();
    alternatives.join("|")
}
