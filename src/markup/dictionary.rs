//! Term Dictionary Registry
//!
//! Built once from a [DictionaryConfig] and read-only afterwards. It owns:
//!
//!     - one ordered, duplicate-free literal set per [TermCategory]
//!     - a trie over the union of all literals for maximal-munch scanning
//!     - the adverse pattern subset and the ideogram sets used by the
//!       pattern heuristics
//!
//! The dictionary is passed explicitly to every parsing entry point, so tests
//! can run the pipeline against small hand-made dictionaries.

use super::config::DictionaryConfig;
use super::token::TermCategory;
use super::trie::TermTrie;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Insertion-ordered set of literals.
#[derive(Debug, Clone, Default)]
struct TermSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl TermSet {
    fn insert(&mut self, literal: &str) -> bool {
        if !self.members.insert(literal.to_string()) {
            return false;
        }
        self.ordered.push(literal.to_string());
        true
    }

    fn contains(&self, literal: &str) -> bool {
        self.members.contains(literal)
    }
}

#[derive(Debug, Clone)]
pub struct TermDictionary {
    categories: HashMap<TermCategory, TermSet>,
    adverse_patterns: HashSet<String>,
    trie: TermTrie,
    adverse_ideograms: Vec<char>,
    label_risk_ideograms: Vec<char>,
    pattern_suffixes: Vec<char>,
}

impl TermDictionary {
    /// Dictionary built from the built-in configuration.
    pub fn builtin() -> Self {
        Self::from_config(&DictionaryConfig::default())
    }

    /// Build a dictionary. Empty literals are skipped and repeated literals
    /// within one category keep their first position.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        let mut dictionary = TermDictionary {
            categories: HashMap::new(),
            adverse_patterns: config.patterns.adverse.iter().cloned().collect(),
            trie: TermTrie::new(),
            adverse_ideograms: config.adverse_ideograms.clone(),
            label_risk_ideograms: config.label_risk_ideograms.clone(),
            pattern_suffixes: config.pattern_suffixes.clone(),
        };

        let stars = &config.stars;
        // Insertion order here is the tie-break order of the global match order
        let lists: [(TermCategory, Vec<&String>); 16] = [
            (
                TermCategory::PatternName,
                config.pattern_whitelist().collect(),
            ),
            (TermCategory::Flow, config.flow.iter().collect()),
            (TermCategory::Warning, config.warning.iter().collect()),
            (TermCategory::Verdict, config.verdict.iter().collect()),
            (TermCategory::Debt, stars.debt.iter().collect()),
            (TermCategory::Opportunity, stars.opportunity.iter().collect()),
            (TermCategory::Authority, stars.authority.iter().collect()),
            (TermCategory::Reputation, stars.reputation.iter().collect()),
            (TermCategory::AdverseStar, stars.adverse.iter().collect()),
            (TermCategory::FavorableStar, stars.favorable.iter().collect()),
            (TermCategory::RomanceStar, stars.romance.iter().collect()),
            (TermCategory::ImperialStar, stars.imperial.iter().collect()),
            (TermCategory::ActionStar, stars.action.iter().collect()),
            (TermCategory::IntellectStar, stars.intellect.iter().collect()),
            (TermCategory::DarkStar, stars.dark.iter().collect()),
            (
                TermCategory::BracketGlyph,
                config.bracket_glyphs.iter().collect(),
            ),
        ];

        for (category, literals) in lists {
            for literal in literals {
                dictionary.add(category, literal);
            }
        }

        debug!(
            literals = dictionary.trie.len(),
            patterns = dictionary.terms(TermCategory::PatternName).len(),
            "built term dictionary"
        );
        dictionary
    }

    fn add(&mut self, category: TermCategory, literal: &str) {
        if literal.is_empty() {
            warn!(category = category.name(), "skipping empty literal");
            return;
        }
        let set = self.categories.entry(category).or_default();
        if !set.insert(literal) {
            debug!(category = category.name(), literal, "duplicate literal ignored");
            return;
        }
        self.trie.insert(literal);
    }

    /// Literals of one category, in configuration order.
    pub fn terms(&self, category: TermCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(|set| set.ordered.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: TermCategory, literal: &str) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|set| set.contains(literal))
    }

    /// Strict pattern whitelist membership.
    pub fn is_pattern(&self, name: &str) -> bool {
        self.contains(TermCategory::PatternName, name)
    }

    /// Explicit membership in the adverse pattern subset.
    pub fn in_adverse_set(&self, name: &str) -> bool {
        self.adverse_patterns.contains(name)
    }

    /// Adverse flag of a pattern name: adverse set first, then the ideogram
    /// heuristic.
    ///
    /// The heuristic is a plain substring check and also fires for favorable
    /// names that happen to contain one of the ideograms.
    pub fn is_adverse_pattern(&self, name: &str) -> bool {
        self.in_adverse_set(name) || contains_any(name, &self.adverse_ideograms)
    }

    /// Whether a label-pair label carries one of the risk ideograms.
    pub fn has_label_risk(&self, label: &str) -> bool {
        contains_any(label, &self.label_risk_ideograms)
    }

    pub fn ends_with_pattern_suffix(&self, label: &str) -> bool {
        label
            .chars()
            .last()
            .is_some_and(|ch| self.pattern_suffixes.contains(&ch))
    }

    /// Byte length of the longest dictionary literal at the start of `text`.
    pub fn longest_match(&self, text: &str) -> Option<usize> {
        self.trie.longest_match(text)
    }

    /// Every literal, longest first, ties in configuration order.
    pub fn match_order(&self) -> Vec<&str> {
        self.trie.match_order()
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl Default for TermDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn contains_any(text: &str, ideograms: &[char]) -> bool {
    text.chars().any(|ch| ideograms.contains(&ch))
}
