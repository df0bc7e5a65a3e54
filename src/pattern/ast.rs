//! Pattern tree types and the builder functions used to assemble grammars.

/// One node of a pattern tree.
///
/// Trees are built once and never mutated by matching, so the same grammar
/// can be reused for any number of parses.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Exact prefix.
    Literal(String),
    /// One character repeated at least once, greedily.
    CharRepeat(char),
    /// Maximal non-empty run of characters from the set.
    CharClass(CharSet),
    /// Match the inner pattern but drop its value.
    Skip(Box<Pattern>),
    /// Ordered choice: the first option that matches wins.
    OneOf(Vec<Pattern>),
    /// Repeated ordered choice, at least once.
    RepeatAny(Vec<Pattern>),
    /// Maximal non-empty run of text not starting with the forbidden string.
    Complement(String),
    Sequence(Vec<Pattern>),
    /// Inner pattern if present, otherwise nothing.
    Optional(Box<Pattern>),
    /// Strip one level of indentation from a block before matching it.
    Dedent(Box<Pattern>),
    /// Lazily produced nonterminal.
    Rule(Rule),
}

/// A nonterminal: a producer invoked at match time to obtain its pattern.
///
/// Going through a function pointer is what lets a rule refer to itself
/// without constructing an infinite tree up front. A named rule labels its
/// result; an anonymous one does not.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: Option<&'static str>,
    pub producer: fn() -> Pattern,
}

impl Rule {
    pub const fn named(name: &'static str, producer: fn() -> Pattern) -> Self {
        Self {
            name: Some(name),
            producer,
        }
    }

    pub const fn anonymous(producer: fn() -> Pattern) -> Self {
        Self {
            name: None,
            producer,
        }
    }

    /// Invoke the producer.
    pub fn resolve(&self) -> Pattern {
        (self.producer)()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::fn_addr_eq(self.producer, other.producer)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name {
            Some(name) => write!(f, "Rule({name})"),
            None => write!(f, "Rule(<anonymous>)"),
        }
    }
}

/// Character set used by [`Pattern::CharClass`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharSet {
    /// ASCII letters, space, `.` and `,`.
    #[default]
    Words,
    /// ASCII letters only.
    Letters,
    /// ASCII digits.
    Digits,
    /// ASCII letters, digits and `_`.
    Identifier,
    /// Exactly the characters of the string.
    Custom(String),
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Literal(text.to_string())
    }
}

impl From<Rule> for Pattern {
    fn from(rule: Rule) -> Self {
        Pattern::Rule(rule)
    }
}

// ─── Builders ───────────────────────────────────────────────────────────────

pub fn literal(text: impl Into<String>) -> Pattern {
    Pattern::Literal(text.into())
}

pub fn repeat_char(ch: char) -> Pattern {
    Pattern::CharRepeat(ch)
}

pub fn char_class(set: CharSet) -> Pattern {
    Pattern::CharClass(set)
}

/// Run of letters, spaces, periods and commas.
pub fn words() -> Pattern {
    Pattern::CharClass(CharSet::Words)
}

pub fn skip(inner: impl Into<Pattern>) -> Pattern {
    Pattern::Skip(Box::new(inner.into()))
}

pub fn one_of<I, P>(options: I) -> Pattern
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    Pattern::OneOf(options.into_iter().map(Into::into).collect())
}

pub fn many<I, P>(options: I) -> Pattern
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    Pattern::RepeatAny(options.into_iter().map(Into::into).collect())
}

pub fn complement(forbidden: impl Into<String>) -> Pattern {
    Pattern::Complement(forbidden.into())
}

pub fn seq<I, P>(items: I) -> Pattern
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    Pattern::Sequence(items.into_iter().map(Into::into).collect())
}

pub fn optional(inner: impl Into<Pattern>) -> Pattern {
    Pattern::Optional(Box::new(inner.into()))
}

pub fn dedent(inner: impl Into<Pattern>) -> Pattern {
    Pattern::Dedent(Box::new(inner.into()))
}

/// Reference to a named rule. The name becomes the label of its result.
pub const fn rule(name: &'static str, producer: fn() -> Pattern) -> Pattern {
    Pattern::Rule(Rule::named(name, producer))
}

/// Reference to an unnamed rule; its result carries no label.
pub const fn anonymous_rule(producer: fn() -> Pattern) -> Pattern {
    Pattern::Rule(Rule::anonymous(producer))
}
