//! Pattern matching engine.
//!
//! A grammar is a tree of [`Pattern`]s built with the functions in [`ast`].
//! Matching always starts at the beginning of the text and consumes a prefix;
//! alternatives are ordered and the first success wins.
//!
//! # Combinators
//!
//! | Builder              | Matches                                              |
//! |----------------------|------------------------------------------------------|
//! | `literal("x")`       | Exactly `x`                                          |
//! | `repeat_char('c')`   | One or more `c`                                      |
//! | `char_class(set)`    | One or more characters from `set`                    |
//! | `words()`            | One or more ASCII letters, spaces, `.` or `,`        |
//! | `complement("x")`    | One or more characters, stopping before `x`          |
//! | `seq([..])`          | Every item in order                                  |
//! | `one_of([..])`       | The first option that matches with a value           |
//! | `many([..])`         | `one_of` values, one or more; skips may separate     |
//! | `optional(p)`        | `p`, or nothing                                      |
//! | `skip(p)`            | `p`, dropping its value                              |
//! | `dedent(p)`          | `p` against the indented block after a newline       |
//! | `rule("name", f)`    | `f()`, labeled `name`; may be recursive              |
//! | `anonymous_rule(f)`  | `f()`, unlabeled                                     |

pub mod ast;
pub mod char_class;
pub mod matcher;


pub use ast::*;
pub use matcher::{Match, match_prefix, parse, parse_all};
