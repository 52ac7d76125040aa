//! Character trie for maximal-munch literal matching.
//!
//! Nodes live in a flat arena indexed by position. Each node maps the next
//! character to a child index and records whether a literal ends there, so
//! finding the longest literal at a position is one walk down the trie with no
//! backtracking, regardless of how the literals overlap as prefixes.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    /// Insertion index of the literal ending at this node
    terminal: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct TermTrie {
    nodes: Vec<TrieNode>,
    literals: Vec<String>,
}

impl TermTrie {
    pub fn new() -> Self {
        TermTrie {
            nodes: vec![TrieNode::default()],
            literals: Vec::new(),
        }
    }

    /// Insert a literal. Returns `false` for empty or already present literals.
    pub fn insert(&mut self, literal: &str) -> bool {
        if literal.is_empty() {
            return false;
        }

        let mut current = 0;
        for ch in literal.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, next);
                    next
                }
            };
        }

        if self.nodes[current].terminal.is_some() {
            return false;
        }
        self.nodes[current].terminal = Some(self.literals.len());
        self.literals.push(literal.to_string());
        true
    }

    /// Byte length of the longest literal that `text` starts with.
    pub fn longest_match(&self, text: &str) -> Option<usize> {
        let mut current = 0;
        let mut best = None;

        for (offset, ch) in text.char_indices() {
            match self.nodes[current].children.get(&ch) {
                Some(&next) => current = next,
                None => break,
            }
            if self.nodes[current].terminal.is_some() {
                best = Some(offset + ch.len_utf8());
            }
        }

        best
    }

    /// All literals, longest first (by character count), ties in insertion order.
    pub fn match_order(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = self.literals.iter().map(String::as_str).collect();
        ordered.sort_by_key(|literal| std::cmp::Reverse(literal.chars().count()));
        ordered
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl Default for TermTrie {
    fn default() -> Self {
        Self::new()
    }
}
