//! A small backtracking text matcher driven by PEG-style pattern combinators.
//!
//! Grammars are trees of [`Pattern`]s. Named rules are plain functions
//! returning a pattern, referenced with [`rule`], so they can be recursive.
//!
//! # Example
//!
//! ```rust
//! use pegger::{CharSet, Pattern, Tree, char_class, many, parse, rule, skip, literal};
//!
//! fn number() -> Pattern {
//!     char_class(CharSet::Digits)
//! }
//!
//! fn numbers() -> Pattern {
//!     many([rule("number", number), skip(literal(","))])
//! }
//!
//! let tree = parse("1,23;", &numbers()).unwrap();
//! assert_eq!(
//!     tree,
//!     Tree::List(vec![
//!         Tree::Labeled("number".into(), Box::new(Tree::Text("1".into()))),
//!         Tree::Labeled("number".into(), Box::new(Tree::Text("23".into()))),
//!     ])
//! );
//! ```

mod error;
pub mod grammars;
pub mod pattern;
pub mod tree;

pub use error::ParseError;
pub use pattern::{
    CharSet, Match, Pattern, Rule, anonymous_rule, char_class, complement, dedent, literal, many,
    match_prefix, one_of, optional, parse, parse_all, repeat_char, rule, seq, skip, words,
};
pub use tree::{Node, Tree};
