//! Result trees produced by matching.
//!
//! Matchers produce a [`Node`]: a [`Tree`] paired with the label of the rule
//! that produced it, if any. When nodes are assembled into a parent, two
//! normalizations always apply:
//!
//! 1. an unlabeled node contributes its bare tree ([`Node::into_tree`]);
//! 2. a list of exactly one element is replaced by that element
//!    ([`collapse`]).
//!
//! So a finished tree never contains a singleton list or an unlabeled pair.

use std::fmt;

/// A parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// Nothing: produced by skipped patterns and absent optionals.
    Empty,
    /// A run of consumed text.
    Text(String),
    /// Results of a sequence or repetition, in order.
    List(Vec<Tree>),
    /// A result that kept the name of the rule that produced it.
    Labeled(String, Box<Tree>),
}

/// A tree together with the label it was produced under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: Option<String>,
    pub tree: Tree,
}

impl Node {
    pub fn new(label: Option<&str>, tree: Tree) -> Self {
        Self {
            label: label.map(str::to_string),
            tree,
        }
    }

    /// The empty, unlabeled node.
    pub fn empty() -> Self {
        Self {
            label: None,
            tree: Tree::Empty,
        }
    }

    pub fn text(label: Option<&str>, text: &str) -> Self {
        Self::new(label, Tree::Text(text.to_string()))
    }

    /// Unlabeled and empty. A labeled empty result still counts as a value.
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.tree == Tree::Empty
    }

    /// Drop an absent label, or fold a present one into the tree.
    pub fn into_tree(self) -> Tree {
        match self.label {
            Some(label) => Tree::Labeled(label, Box::new(self.tree)),
            None => self.tree,
        }
    }
}

/// Append `node` to an accumulating list, unwrapping it first. Unlabeled
/// empty results contribute nothing.
pub fn push_node(items: &mut Vec<Tree>, node: Node) {
    if !node.is_empty() {
        items.push(node.into_tree());
    }
}

/// Replace a singleton list by its element. An empty list is [`Tree::Empty`].
pub fn collapse(mut items: Vec<Tree>) -> Tree {
    match items.len() {
        0 => Tree::Empty,
        1 => items.pop().unwrap_or(Tree::Empty),
        _ => Tree::List(items),
    }
}

impl Tree {
    /// All text leaves, concatenated in order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Tree::Empty => {}
            Tree::Text(text) => out.push_str(text),
            Tree::List(items) => items.iter().for_each(|item| item.collect_text(out)),
            Tree::Labeled(_, inner) => inner.collect_text(out),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            Tree::Empty => writeln!(f, "{pad}()"),
            Tree::Text(text) => writeln!(f, "{pad}{text:?}"),
            Tree::Labeled(label, inner) => {
                writeln!(f, "{pad}{label}:")?;
                match inner.as_ref() {
                    // A labeled list reads better without its own brackets.
                    Tree::List(items) => items
                        .iter()
                        .try_for_each(|item| item.write_indented(f, depth + 1)),
                    other => other.write_indented(f, depth + 1),
                }
            }
            Tree::List(items) => {
                writeln!(f, "{pad}[")?;
                for item in items {
                    item.write_indented(f, depth + 1)?;
                }
                writeln!(f, "{pad}]")
            }
        }
    }
}

/// Indented outline, one leaf per line.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
