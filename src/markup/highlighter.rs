//! Full pipeline entry point.
//!
//! A [Highlighter] owns the dictionary and the preprocessor and turns a raw
//! message into a [RenderedMessage]. It keeps no state between calls: on a
//! streamed message, call [Highlighter::render] again with the whole text
//! received so far.

use super::blocks::{split_blocks, Block};
use super::config::{ConfigError, DictionaryConfig};
use super::dictionary::TermDictionary;
use super::label_pair;
use super::preprocess::{ExtractionResult, Preprocessor};
use super::token::Token;
use serde::Serialize;

/// Highlighted blocks of a message plus the follow-up questions to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    pub blocks: Vec<Block>,
    /// At most [MAX_FOLLOW_UP_QUESTIONS](super::questions::MAX_FOLLOW_UP_QUESTIONS)
    pub questions: Vec<String>,
}

impl RenderedMessage {
    /// No visible body yet (e.g. only directives have streamed in).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    dictionary: TermDictionary,
    preprocessor: Preprocessor,
}

impl Highlighter {
    pub fn new(dictionary: TermDictionary, preprocessor: Preprocessor) -> Self {
        Highlighter {
            dictionary,
            preprocessor,
        }
    }

    pub fn from_config(config: &DictionaryConfig) -> Result<Self, ConfigError> {
        Ok(Highlighter {
            dictionary: TermDictionary::from_config(config),
            preprocessor: Preprocessor::from_config(config)?,
        })
    }

    /// Clean a raw message and pull out its follow-up questions.
    pub fn extract(&self, raw: &str) -> ExtractionResult {
        self.preprocessor.process(raw)
    }

    /// Highlight one text run (label pairs, bracket phrases, terms).
    pub fn highlight_run(&self, text: &str) -> Vec<Token> {
        label_pair::parse(&self.dictionary, text)
    }

    /// Run the whole pipeline on a raw message.
    pub fn render(&self, raw: &str) -> RenderedMessage {
        let extraction = self.extract(raw);
        let questions = extraction.top_questions().to_vec();
        RenderedMessage {
            blocks: split_blocks(&self.dictionary, &extraction.cleaned_text),
            questions,
        }
    }
}
