//! # ziwei-markup
//!
//! Term highlighting for streamed chart analysis text.
//!
//! The library turns the raw, still-growing text of an analysis message into
//! typed tokens a presentation layer can style: named chart configurations,
//! transformation markers, star names, risk and verdict vocabulary, and
//! bracketed emphasis. It also pulls the "recommended follow-up" question list
//! out of the message body.
//!
//! Everything lives under the [markup] module:
//!
//!     raw text
//!       └── preprocess   strip directives, split off the question block
//!             └── blocks       markdown paragraphs and list items
//!                   └── label_pair   "label：content" lines
//!                         └── bracket      「...」 and 【...】 phrases
//!                               └── tokenizer    longest-match term scan
//!
//! All stages are pure functions over `&str` taking a [markup::TermDictionary]
//! explicitly, so re-running the whole pipeline on every streamed update is the
//! expected usage.

pub mod markup;
