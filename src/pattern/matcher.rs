//! Pattern matcher: consume a prefix of a text according to a [`Pattern`].
//!
//! Every combinator is a function from the remaining input to a [`Node`] plus
//! a new remainder. Composite combinators re-enter [`match_pattern`] for their
//! children, which is also where rule references are resolved.
//!
//! The remaining input is a buffer plus an offset. The buffer is the caller's
//! text until a dedent rewrites it; the rewritten text is built once and
//! shared, so consuming from it never copies.

use std::borrow::Cow;
use std::rc::Rc;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::tree::{Node, Tree, collapse, push_node};

use super::ast::*;

/// A successful match at the start of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    pub tree: Tree,
    /// Text left after the match.
    pub rest: Cow<'t, str>,
}

impl Match<'_> {
    /// Whether the match consumed the whole text.
    pub fn is_complete(&self) -> bool {
        self.rest.is_empty()
    }
}

#[derive(Debug, Clone)]
enum Source<'t> {
    Borrowed(&'t str),
    /// Text produced by a dedent.
    Shared(Rc<str>),
}

/// Remaining input: `source[pos..]`.
#[derive(Debug, Clone)]
struct Input<'t> {
    source: Source<'t>,
    pos: usize,
}

impl<'t> Input<'t> {
    fn borrowed(text: &'t str) -> Self {
        Self {
            source: Source::Borrowed(text),
            pos: 0,
        }
    }

    fn shared(text: String) -> Self {
        Self {
            source: Source::Shared(Rc::from(text)),
            pos: 0,
        }
    }

    fn as_str(&self) -> &str {
        match &self.source {
            Source::Borrowed(s) => &s[self.pos..],
            Source::Shared(s) => &s[self.pos..],
        }
    }

    fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Drop the first `n` bytes.
    fn advance(&self, n: usize) -> Self {
        Self {
            source: self.source.clone(),
            pos: self.pos + n,
        }
    }

    fn into_cow(self) -> Cow<'t, str> {
        match self.source {
            Source::Borrowed(s) => Cow::Borrowed(&s[self.pos..]),
            Source::Shared(s) => Cow::Owned(s[self.pos..].to_string()),
        }
    }
}

/// Internal match state: the labeled node and the remainder after it.
struct Step<'t> {
    node: Node,
    rest: Input<'t>,
}

type Outcome<'t> = Result<Step<'t>, ParseError>;

// ─── Public API ─────────────────────────────────────────────────────────────

/// Match `pattern` at the start of `text`, returning the tree and remainder.
pub fn match_prefix<'t>(text: &'t str, pattern: &Pattern) -> Result<Match<'t>, ParseError> {
    let result = match_pattern(pattern, &Input::borrowed(text));
    match &result {
        Ok(step) => debug!(
            input = text.len(),
            consumed = text.len().saturating_sub(step.rest.len()),
            "pattern matched"
        ),
        Err(err) => debug!(input = text.len(), %err, "pattern failed"),
    }
    let step = result?;
    Ok(Match {
        tree: step.node.into_tree(),
        rest: step.rest.into_cow(),
    })
}

/// Match `pattern` at the start of `text` and return only the tree.
///
/// The pattern does not need to consume the whole text; use [`parse_all`]
/// for that.
pub fn parse(text: &str, pattern: &Pattern) -> Result<Tree, ParseError> {
    match_prefix(text, pattern).map(|m| m.tree)
}

/// Like [`parse`], but fails with [`ParseError::Unconsumed`] unless the whole
/// text was consumed.
pub fn parse_all(text: &str, pattern: &Pattern) -> Result<Tree, ParseError> {
    let m = match_prefix(text, pattern)?;
    if m.is_complete() {
        Ok(m.tree)
    } else {
        Err(ParseError::Unconsumed(m.rest.into_owned()))
    }
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

/// Resolve rule references, then dispatch on the pattern variant.
fn match_pattern<'t>(pattern: &Pattern, input: &Input<'t>) -> Outcome<'t> {
    let Pattern::Rule(rule) = pattern else {
        return match_variant(pattern, None, input);
    };
    let name = rule.name.unwrap_or("<anonymous>");
    let resolved = rule.resolve();
    if matches!(resolved, Pattern::Rule(_)) {
        return Err(ParseError::UnknownPattern(name.to_string()));
    }
    let result = match_variant(&resolved, rule.name, input);
    trace!(rule = name, matched = result.is_ok(), "rule");
    result
}

fn match_variant<'t>(pattern: &Pattern, label: Option<&str>, input: &Input<'t>) -> Outcome<'t> {
    match pattern {
        Pattern::Literal(lit) => match_literal(input, lit, label),
        Pattern::CharRepeat(ch) => match_char_repeat(input, *ch, label),
        Pattern::CharClass(set) => match_char_class(input, set, label),
        Pattern::Skip(inner) => match_skip(input, inner),
        Pattern::OneOf(options) => match_one_of(input, options),
        Pattern::RepeatAny(options) => match_repeat_any(input, options, label),
        Pattern::Complement(forbidden) => match_complement(input, forbidden, label),
        Pattern::Sequence(items) => match_sequence(input, items, label),
        Pattern::Optional(inner) => match_optional(input, inner),
        Pattern::Dedent(inner) => match_dedent(input, inner),
        // match_pattern resolves rules before getting here, so this is a
        // rule that produced another rule.
        Pattern::Rule(rule) => Err(ParseError::UnknownPattern(
            rule.name.unwrap_or("<anonymous>").to_string(),
        )),
    }
}

/// Run `pattern`, turning a recoverable failure into `None`. Fatal errors
/// still propagate.
fn attempt<'t>(pattern: &Pattern, input: &Input<'t>) -> Result<Option<Step<'t>>, ParseError> {
    match match_pattern(pattern, input) {
        Ok(step) => Ok(Some(step)),
        Err(err) if err.is_fatal() => Err(err),
        Err(_) => Ok(None),
    }
}

/// Consume the first `n` bytes of the input as a text node.
fn consume<'t>(input: &Input<'t>, n: usize, label: Option<&str>) -> Outcome<'t> {
    if n == 0 {
        return Err(ParseError::NoMatch);
    }
    Ok(Step {
        node: Node::text(label, &input.as_str()[..n]),
        rest: input.advance(n),
    })
}

// ─── Terminals ──────────────────────────────────────────────────────────────

fn match_literal<'t>(input: &Input<'t>, lit: &str, label: Option<&str>) -> Outcome<'t> {
    if !input.as_str().starts_with(lit) {
        return Err(ParseError::NoMatch);
    }
    Ok(Step {
        node: Node::text(label, lit),
        rest: input.advance(lit.len()),
    })
}

fn match_char_repeat<'t>(input: &Input<'t>, ch: char, label: Option<&str>) -> Outcome<'t> {
    let text = input.as_str();
    let n = text.len() - text.trim_start_matches(ch).len();
    consume(input, n, label)
}

fn match_char_class<'t>(input: &Input<'t>, set: &CharSet, label: Option<&str>) -> Outcome<'t> {
    consume(input, set.span(input.as_str()), label)
}

/// Everything up to the first occurrence of `forbidden`, or to the end.
fn match_complement<'t>(input: &Input<'t>, forbidden: &str, label: Option<&str>) -> Outcome<'t> {
    let text = input.as_str();
    let n = text
        .char_indices()
        .find(|&(i, _)| text[i..].starts_with(forbidden))
        .map_or(text.len(), |(i, _)| i);
    consume(input, n, label)
}

// ─── Combinators ────────────────────────────────────────────────────────────

fn match_skip<'t>(input: &Input<'t>, inner: &Pattern) -> Outcome<'t> {
    let step = match_pattern(inner, input)?;
    Ok(Step {
        node: Node::empty(),
        rest: step.rest,
    })
}

/// Ordered choice. The chosen option's node passes through as-is; options
/// that match with an empty result (skips, absent optionals) are passed over.
fn match_one_of<'t>(input: &Input<'t>, options: &[Pattern]) -> Outcome<'t> {
    for option in options {
        if let Some(step) = attempt(option, input)?
            && !step.node.is_empty()
        {
            return Ok(step);
        }
    }
    Err(ParseError::NoMatch)
}

/// Repeated ordered choice. The option scan restarts from the first option
/// after every value, so earlier options always take priority.
///
/// An option matching with an empty result (a skip) moves the input forward
/// but is not a repetition; only values count, and at least one is needed.
fn match_repeat_any<'t>(
    input: &Input<'t>,
    options: &[Pattern],
    label: Option<&str>,
) -> Outcome<'t> {
    let mut items = Vec::new();
    let mut rest = input.clone();
    'scan: while !rest.as_str().is_empty() {
        for option in options {
            let Some(step) = attempt(option, &rest)? else {
                continue;
            };
            let progressed = step.rest.len() < rest.len();
            if step.node.is_empty() && !progressed {
                continue; // absent optional
            }
            push_node(&mut items, step.node);
            rest = step.rest;
            if !progressed {
                break 'scan; // zero-width value would repeat forever
            }
            continue 'scan;
        }
        break;
    }
    if items.is_empty() {
        return Err(ParseError::NoMatch);
    }
    Ok(Step {
        node: Node::new(label, collapse(items)),
        rest,
    })
}

/// All items in order; no backtracking into earlier items.
fn match_sequence<'t>(
    input: &Input<'t>,
    patterns: &[Pattern],
    label: Option<&str>,
) -> Outcome<'t> {
    let mut items = Vec::new();
    let mut rest = input.clone();
    for pattern in patterns {
        let step = match_pattern(pattern, &rest)?;
        push_node(&mut items, step.node);
        rest = step.rest;
    }
    Ok(Step {
        node: Node::new(label, collapse(items)),
        rest,
    })
}

fn match_optional<'t>(input: &Input<'t>, inner: &Pattern) -> Outcome<'t> {
    Ok(attempt(inner, input)?.unwrap_or_else(|| Step {
        node: Node::empty(),
        rest: input.clone(),
    }))
}

/// Match `inner` against the indented block that follows a newline.
///
/// The block is the maximal run of lines sharing the first line's leading
/// spaces. Those spaces are stripped, a single `\n` is kept in front, and the
/// inner pattern sees only that text. The remainder is the inner remainder,
/// a newline, then the lines after the block untouched.
fn match_dedent<'t>(input: &Input<'t>, inner: &Pattern) -> Outcome<'t> {
    let Some(body) = input.as_str().strip_prefix('\n') else {
        return Err(ParseError::NoMatch);
    };
    let indent_len = body.len() - body.trim_start_matches(' ').len();
    if indent_len == 0 {
        return Err(ParseError::NoMatch);
    }
    let indent = &body[..indent_len];

    let mut lines = body.split('\n').peekable();
    let block = lines
        .peeking_take_while(|line| line.starts_with(indent))
        .map(|line| &line[indent_len..])
        .join("\n");
    let after = lines.join("\n");

    let step = match_pattern(inner, &Input::shared(format!("\n{block}")))?;
    Ok(Step {
        node: step.node,
        rest: Input::shared(format!("{}\n{after}", step.rest.as_str())),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Tree {
        Tree::Text(s.to_string())
    }

    fn labeled(label: &str, tree: Tree) -> Tree {
        Tree::Labeled(label.to_string(), Box::new(tree))
    }

    /// Match and return (tree, remainder).
    fn run(input: &str, pattern: &Pattern) -> Option<(Tree, String)> {
        match_prefix(input, pattern)
            .ok()
            .map(|m| (m.tree, m.rest.into_owned()))
    }

    fn digits() -> Pattern {
        char_class(CharSet::Digits)
    }

    fn number() -> Pattern {
        digits()
    }

    // --- Literals ---

    #[test]
    fn literal_prefix() {
        assert_eq!(
            run("hello world", &literal("hello")),
            Some((text("hello"), " world".into()))
        );
    }

    #[test]
    fn literal_no_match() {
        assert_eq!(run("goodbye", &literal("hello")), None);
    }

    #[test]
    fn empty_literal_consumes_nothing() {
        assert_eq!(run("abc", &literal("")), Some((text(""), "abc".into())));
    }

    #[test]
    fn literal_multibyte() {
        assert_eq!(
            run("héllo", &literal("hé")),
            Some((text("hé"), "llo".into()))
        );
    }

    // --- Char repeat ---

    #[test]
    fn char_repeat_greedy() {
        assert_eq!(
            run("aaab", &repeat_char('a')),
            Some((text("aaa"), "b".into()))
        );
    }

    #[test]
    fn char_repeat_needs_one() {
        assert_eq!(run("baaa", &repeat_char('a')), None);
        assert_eq!(run("", &repeat_char('a')), None);
    }

    // --- Char class ---

    #[test]
    fn words_default_set() {
        assert_eq!(
            run("Hello, world. 42", &words()),
            Some((text("Hello, world. "), "42".into()))
        );
    }

    #[test]
    fn char_class_needs_one() {
        assert_eq!(run("abc", &digits()), None);
    }

    #[test]
    fn custom_char_class() {
        let p = char_class(CharSet::Custom("ab".into()));
        assert_eq!(run("abbac", &p), Some((text("abba"), "c".into())));
    }

    // --- Complement ---

    #[test]
    fn complement_stops_before_forbidden() {
        assert_eq!(
            run("abcSTOPdef", &complement("STOP")),
            Some((text("abc"), "STOPdef".into()))
        );
    }

    #[test]
    fn complement_runs_to_end() {
        assert_eq!(run("abc", &complement("STOP")), Some((text("abc"), "".into())));
    }

    #[test]
    fn complement_needs_one() {
        assert_eq!(run("STOPxyz", &complement("STOP")), None);
        assert_eq!(run("abc", &complement("")), None);
    }

    // --- Skip ---

    #[test]
    fn skip_consumes_but_yields_empty() {
        assert_eq!(
            run("abc", &skip(literal("ab"))),
            Some((Tree::Empty, "c".into()))
        );
    }

    #[test]
    fn skip_drops_label() {
        assert_eq!(
            run("abc", &skip(rule("num", number))),
            None,
            "digits do not match letters"
        );
        assert_eq!(run("12c", &skip(rule("num", number))).map(|r| r.0), Some(Tree::Empty));
    }

    // --- Alternation ---

    #[test]
    fn one_of_first_success_wins() {
        let p = one_of([literal("a"), literal("ab")]);
        assert_eq!(run("ab", &p), Some((text("a"), "b".into())));
    }

    #[test]
    fn one_of_tries_later_options() {
        let p = one_of([literal("x"), literal("ab")]);
        assert_eq!(run("ab", &p), Some((text("ab"), "".into())));
    }

    #[test]
    fn one_of_none_match() {
        assert_eq!(run("c", &one_of([literal("a"), literal("b")])), None);
    }

    #[test]
    fn one_of_passes_over_empty_results() {
        let p = one_of([optional(literal("x")), literal("a")]);
        assert_eq!(run("ab", &p), Some((text("a"), "b".into())));
    }

    #[test]
    fn one_of_passes_over_consuming_skip() {
        let p = one_of([skip(literal("a")), literal("ab")]);
        assert_eq!(run("ab", &p), Some((text("ab"), "".into())));
    }

    #[test]
    fn one_of_of_only_skips_fails() {
        assert_eq!(run("ab", &one_of([skip(literal("a"))])), None);
    }

    #[test]
    fn one_of_keeps_option_label() {
        let p = one_of([rule("num", number), literal("a")]);
        assert_eq!(run("7", &p).map(|r| r.0), Some(labeled("num", text("7"))));
    }

    // --- Repetition ---

    #[test]
    fn many_greedy() {
        let p = many([digits(), literal(",")]);
        assert_eq!(
            run("12,34,56;", &p),
            Some((
                Tree::List(vec![
                    text("12"),
                    text(","),
                    text("34"),
                    text(","),
                    text("56")
                ]),
                ";".into()
            ))
        );
    }

    #[test]
    fn many_needs_one() {
        assert_eq!(run(";", &many([digits()])), None);
        assert_eq!(run("", &many([literal("")])), None);
    }

    #[test]
    fn many_single_repetition_collapses() {
        assert_eq!(run("12;", &many([digits()])), Some((text("12"), ";".into())));
    }

    #[test]
    fn many_restarts_from_first_option() {
        // "a" is always preferred over "ab" because it comes first.
        let p = many([literal("a"), literal("ab"), literal("b")]);
        assert_eq!(
            run("abab", &p).map(|r| r.0),
            Some(Tree::List(vec![text("a"), text("b"), text("a"), text("b")]))
        );
    }

    #[test]
    fn many_stops_on_zero_width_match() {
        let p = many([literal("")]);
        assert_eq!(run("abc", &p), Some((text(""), "abc".into())));
    }

    #[test]
    fn many_skips_ignored_items() {
        let p = many([digits(), skip(literal(","))]);
        assert_eq!(
            run("1,2", &p).map(|r| r.0),
            Some(Tree::List(vec![text("1"), text("2")]))
        );
    }

    #[test]
    fn many_passes_over_absent_optionals() {
        let p = many([optional(literal("x")), literal("a")]);
        assert_eq!(
            run("aab", &p),
            Some((Tree::List(vec![text("a"), text("a")]), "b".into()))
        );
    }

    #[test]
    fn many_of_only_skips_fails() {
        assert_eq!(run(",,,x", &many([skip(literal(","))])), None);
    }

    #[test]
    fn many_skips_do_not_count_as_repetitions() {
        let p = many([skip(literal(",")), digits()]);
        assert_eq!(run(",,7,x", &p), Some((text("7"), ",x".into())));
    }

    #[test]
    fn labeled_many_wraps_collapsed_list() {
        fn digit_runs() -> Pattern {
            many([char_class(CharSet::Digits), skip(literal(" "))])
        }
        assert_eq!(
            run("1 2", &rule("runs", digit_runs)).map(|r| r.0),
            Some(labeled("runs", Tree::List(vec![text("1"), text("2")])))
        );
        assert_eq!(
            run("1", &rule("runs", digit_runs)).map(|r| r.0),
            Some(labeled("runs", text("1")))
        );
    }

    // --- Sequence ---

    #[test]
    fn sequence_collects_in_order() {
        let p = seq([literal("a"), literal("b")]);
        assert_eq!(
            run("abc", &p),
            Some((Tree::List(vec![text("a"), text("b")]), "c".into()))
        );
    }

    #[test]
    fn sequence_fails_as_a_whole() {
        let p = seq([literal("a"), literal("x")]);
        assert_eq!(run("abc", &p), None);
    }

    #[test]
    fn sequence_does_not_backtrack() {
        // Greedy letters eat the "b" the literal needs.
        let p = seq([char_class(CharSet::Letters), literal("b")]);
        assert_eq!(run("ab", &p), None);
    }

    #[test]
    fn sequence_drops_skipped_and_collapses() {
        let p = seq([skip(literal("(")), digits(), skip(literal(")"))]);
        assert_eq!(run("(42)", &p), Some((text("42"), "".into())));
    }

    #[test]
    fn sequence_of_only_skips_is_empty() {
        let p = seq([skip(literal("a"))]);
        assert_eq!(run("ab", &p), Some((Tree::Empty, "b".into())));
    }

    #[test]
    fn sequence_keeps_labeled_children() {
        let p = seq([rule("num", number), literal("+"), rule("num", number)]);
        assert_eq!(
            run("1+2", &p).map(|r| r.0),
            Some(Tree::List(vec![
                labeled("num", text("1")),
                text("+"),
                labeled("num", text("2")),
            ]))
        );
    }

    // --- Optional ---

    #[test]
    fn optional_present() {
        assert_eq!(
            run("xy", &optional(literal("x"))),
            Some((text("x"), "y".into()))
        );
    }

    #[test]
    fn optional_absent() {
        assert_eq!(
            run("x", &optional(literal("y"))),
            Some((Tree::Empty, "x".into()))
        );
    }

    // --- Dedent ---

    #[test]
    fn dedent_strips_block_indentation() {
        let p = dedent(seq([skip(literal("\n")), literal("foo\nbar")]));
        assert_eq!(
            run("\n  foo\n  bar\nbaz", &p),
            Some((text("foo\nbar"), "\nbaz".into()))
        );
    }

    #[test]
    fn dedent_requires_newline_and_indent() {
        let p = dedent(complement("\n"));
        assert_eq!(run("  foo", &p), None);
        assert_eq!(run("\nfoo", &p), None);
    }

    #[test]
    fn dedent_inner_failure() {
        let p = dedent(seq([skip(literal("\n")), literal("bar")]));
        assert_eq!(run("\n  foo\nbar", &p), None);
    }

    #[test]
    fn dedent_reattaches_unconsumed_block_lines() {
        let p = dedent(seq([skip(literal("\n")), complement("\n")]));
        assert_eq!(
            run("\n    one\n    two\n  three", &p),
            Some((text("one"), "\ntwo\n  three".into()))
        );
    }

    #[test]
    fn dedent_keeps_deeper_indentation() {
        let p = dedent(seq([skip(literal("\n")), complement("\n")]));
        assert_eq!(
            run("\n  a\n    b\nc", &p),
            Some((text("a"), "\n  b\nc".into()))
        );
    }

    #[test]
    fn dedent_block_to_end_of_text() {
        let p = dedent(seq([skip(literal("\n")), complement("\n")]));
        assert_eq!(run("\n  only", &p), Some((text("only"), "\n".into())));
    }

    #[test]
    fn dedent_rest_feeds_following_patterns() {
        let p = seq([
            literal("head:"),
            dedent(seq([skip(literal("\n")), complement("\n")])),
            skip(literal("\n")),
            literal("tail"),
        ]);
        assert_eq!(
            run("head:\n  body\ntail!", &p),
            Some((
                Tree::List(vec![text("head:"), text("body"), text("tail")]),
                "!".into()
            ))
        );
    }

    // --- Rules ---

    fn greeting() -> Pattern {
        seq([literal("hi"), skip(literal(" "))])
    }

    fn produces_rule() -> Pattern {
        rule("greeting", greeting)
    }

    #[test]
    fn named_rule_labels_result() {
        assert_eq!(
            run("hi there", &rule("greeting", greeting)),
            Some((labeled("greeting", text("hi")), "there".into()))
        );
    }

    #[test]
    fn anonymous_rule_has_no_label() {
        assert_eq!(
            run("hi there", &anonymous_rule(greeting)).map(|r| r.0),
            Some(text("hi"))
        );
    }

    #[test]
    fn rule_producing_rule_is_fatal() {
        let p = rule("outer", produces_rule);
        assert_eq!(
            match_prefix("hi ", &p),
            Err(ParseError::UnknownPattern("outer".into()))
        );
    }

    #[test]
    fn fatal_error_escapes_alternation_and_optional() {
        let bad = rule("outer", produces_rule);
        assert!(matches!(
            match_prefix("x", &one_of([bad.clone(), literal("x")])),
            Err(ParseError::UnknownPattern(_))
        ));
        assert!(matches!(
            match_prefix("x", &optional(bad)),
            Err(ParseError::UnknownPattern(_))
        ));
    }

    // --- Entry points ---

    #[test]
    fn parse_discards_remainder() {
        assert_eq!(parse("hello world", &literal("hello")), Ok(text("hello")));
        assert_eq!(parse("goodbye", &literal("hello")), Err(ParseError::NoMatch));
    }

    #[test]
    fn parse_all_requires_full_consumption() {
        assert_eq!(parse_all("hello", &literal("hello")), Ok(text("hello")));
        assert_eq!(
            parse_all("hello world", &literal("hello")),
            Err(ParseError::Unconsumed(" world".into()))
        );
    }

    #[test]
    fn remainder_stays_borrowed_without_dedent() {
        let m = match_prefix("abc", &literal("a")).unwrap();
        assert!(matches!(m.rest, Cow::Borrowed("bc")));
        assert!(!m.is_complete());
    }

    #[test]
    fn shared_input_advances_without_copying() {
        let input = Input::shared("\nabc".to_string());
        let rest = input.advance(2);
        assert_eq!(rest.as_str(), "bc");
        let (Source::Shared(a), Source::Shared(b)) = (&input.source, &rest.source) else {
            panic!("dedented input should stay shared");
        };
        assert!(Rc::ptr_eq(a, b));
    }

    #[test]
    fn dedented_block_consumed_in_place() {
        let p = dedent(many([literal("\n"), literal("a")]));
        let step = match_pattern(&p, &Input::borrowed("\n  aa\n  a\nz")).unwrap();
        assert_eq!(
            step.node.into_tree(),
            Tree::List(vec![
                text("\n"),
                text("a"),
                text("a"),
                text("\n"),
                text("a")
            ])
        );
        assert_eq!(step.rest.as_str(), "\nz");
    }
}
