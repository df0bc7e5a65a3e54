//! Ready-made grammars, built only from the public pattern builders.
//!
//! They double as examples of recursive rules and of [`dedent`].

use phf::{Map, phf_map};

use crate::pattern::*;

/// Grammars by name. Keep sorted alphabetically.
static GRAMMARS: Map<&'static str, fn() -> Pattern> = phf_map! {
    "list" => nested_list as fn() -> Pattern,
    "outline" => outline as fn() -> Pattern,
};

/// Look up a grammar by name.
pub fn by_name(name: &str) -> Option<Pattern> {
    GRAMMARS.get(name).map(|producer| producer())
}

/// Names of all grammars, in alphabetical order.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = GRAMMARS.keys().copied().collect();
    names.sort();
    names
}

// ─── Outline ────────────────────────────────────────────────────────────────

/// A small document format:
///
/// ```text
/// Title
/// =====
/// A paragraph line.
///   An indented block, which is
///   itself an outline.
/// ```
///
/// Produces `document` containing `heading`, `paragraph` and `block` nodes.
pub fn outline() -> Pattern {
    rule("document", document)
}

fn document() -> Pattern {
    many([
        rule("heading", heading),
        dedent(rule("block", block)),
        rule("paragraph", paragraph),
        skip(literal("\n")),
    ])
}

/// A line underlined with `=`.
fn heading() -> Pattern {
    seq([
        complement("\n"),
        skip(literal("\n")),
        skip(repeat_char('=')),
    ])
}

fn paragraph() -> Pattern {
    complement("\n")
}

fn block() -> Pattern {
    seq([skip(literal("\n")), anonymous_rule(document)])
}

// ─── Nested lists ───────────────────────────────────────────────────────────

/// Bracketed, comma separated lists of numbers, nested to any depth:
/// `[1,[2,3],[]]`. Elements of one list come out flat; a trailing comma is
/// accepted.
pub fn nested_list() -> Pattern {
    rule("list", list)
}

fn list() -> Pattern {
    seq([
        skip(literal("[")),
        optional(many([anonymous_rule(element), skip(literal(","))])),
        skip(literal("]")),
    ])
}

fn element() -> Pattern {
    one_of([rule("number", number), rule("list", list)])
}

fn number() -> Pattern {
    char_class(CharSet::Digits)
}
