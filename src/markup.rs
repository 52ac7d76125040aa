//! Main module for term highlighting functionality

pub mod blocks;
pub mod bracket;
pub mod config;
pub mod dictionary;
pub mod formats;
pub mod highlighter;
pub mod label_pair;
pub mod preprocess;
pub mod questions;
pub mod token;
pub mod tokenizer;
pub mod trie;
pub mod user_message;

pub use blocks::{split_blocks, Block, Inline};
pub use config::{ConfigError, DictionaryConfig};
pub use dictionary::TermDictionary;
pub use formats::{FormatError, FormatRegistry, Formatter};
pub use highlighter::{Highlighter, RenderedMessage};
pub use preprocess::{ExtractionResult, Preprocessor};
pub use questions::MAX_FOLLOW_UP_QUESTIONS;
pub use token::{TermCategory, Token};
