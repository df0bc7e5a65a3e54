//! Character set membership tests for [`Pattern::CharClass`](super::Pattern::CharClass).

use phf::{Map, phf_map};

use super::ast::CharSet;

/// Predefined sets by name. Keep sorted alphabetically.
static NAMED_SETS: Map<&'static str, CharSet> = phf_map! {
    "digits" => CharSet::Digits,
    "identifier" => CharSet::Identifier,
    "letters" => CharSet::Letters,
    "words" => CharSet::Words,
};

impl CharSet {
    /// Look up a predefined set by name (case-insensitive).
    pub fn named(name: &str) -> Option<CharSet> {
        NAMED_SETS.get(name.to_lowercase().as_str()).cloned()
    }

    /// Names accepted by [`CharSet::named`], in alphabetical order.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = NAMED_SETS.keys().copied().collect();
        names.sort();
        names
    }

    /// Test whether `ch` is a member of this set.
    pub fn contains(&self, ch: char) -> bool {
        match self {
            CharSet::Words => ch.is_ascii_alphabetic() || " .,".contains(ch),
            CharSet::Letters => ch.is_ascii_alphabetic(),
            CharSet::Digits => ch.is_ascii_digit(),
            CharSet::Identifier => ch.is_ascii_alphanumeric() || ch == '_',
            CharSet::Custom(chars) => chars.contains(ch),
        }
    }

    /// Byte length of the longest prefix of `text` made of members.
    pub fn span(&self, text: &str) -> usize {
        text.find(|ch: char| !self.contains(ch)).unwrap_or(text.len())
    }
}
