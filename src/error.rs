/// Why a parse did not produce a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The pattern does not match at the start of the text.
    NoMatch,
    /// A rule produced something the matcher cannot dispatch on: another bare
    /// rule reference. This is a grammar construction bug, never an input
    /// problem.
    UnknownPattern(String),
    /// The pattern matched but left this text unconsumed (see
    /// [`parse_all`](crate::parse_all)).
    Unconsumed(String),
}

impl ParseError {
    /// Fatal errors are never recovered from by alternation or optionals.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::UnknownPattern(_))
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => write!(f, "No pattern found"),
            Self::UnknownPattern(name) => {
                write!(f, "Rule {name} does not produce a matchable pattern")
            }
            Self::Unconsumed(rest) => {
                write!(f, "Unconsumed input ({} characters left)", rest.chars().count())
            }
        }
    }
}

impl std::error::Error for ParseError {}
