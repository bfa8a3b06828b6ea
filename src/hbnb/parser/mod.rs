//! # Command Parser
//!
//! Turns one input line into a [`Line`]. Two grammars produce the same
//! [`Command`] shape:
//!
//! ```text
//! classic:  update User 1234 first_name "Betty"
//! dot:      User.update("1234", "first_name", "Betty")
//! ```
//!
//! The leading identifier word decides the grammar: a known verb selects the
//! classic rule ([`classic`]), anything else is handed to the dot-call rule
//! ([`dot`]). Parsing never fails. Lines that fit neither rule come back as
//! [`Line::Malformed`] and the dispatcher decides what to report.
//!
//! Arguments are kept as quote-stripped text. Validation and typing happen in
//! the command layer so that error precedence stays in one place.

pub mod classic;
pub mod dot;
pub mod literal;
pub mod normalize;

use std::fmt;

/// The six record operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Show,
    Destroy,
    All,
    Update,
    Count,
}

impl Verb {
    pub const ALL: [Verb; 6] = [
        Verb::Create,
        Verb::Show,
        Verb::Destroy,
        Verb::All,
        Verb::Update,
        Verb::Count,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Show => "show",
            Verb::Destroy => "destroy",
            Verb::All => "all",
            Verb::Update => "update",
            Verb::Count => "count",
        }
    }

    pub fn from_word(word: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.name() == word)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which grammar produced a command. Only `all` renders differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Classic,
    Dot,
}

/// Attribute arguments of an `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Attributes {
    None,
    /// One name/value pair, quote-stripped but not yet typed
    Pair {
        name: Option<String>,
        value: Option<String>,
    },
    /// Source text of a `{...}` literal, parsed only after the target
    /// record has been found
    Mapping(String),
}

/// A normalized operation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub verb: Verb,
    pub syntax: Syntax,
    pub type_name: Option<String>,
    pub instance_id: Option<String>,
    pub attributes: Attributes,
}

impl Command {
    pub fn new(verb: Verb, syntax: Syntax) -> Self {
        Self {
            verb,
            syntax,
            type_name: None,
            instance_id: None,
            attributes: Attributes::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Empty,
    Quit,
    Help(Option<String>),
    Command(Command),
    /// A well-formed dot call naming a method we do not have
    UnknownSyntax {
        type_name: String,
        method: String,
    },
    /// Neither a known verb nor a dot call
    Malformed,
}

pub fn parse_line(input: &str) -> Line {
    let line = input.trim();
    if line.is_empty() {
        return Line::Empty;
    }
    if let Some(topic) = line.strip_prefix('?') {
        return Line::Help(first_word(topic));
    }

    let (word, rest) = split_identifier(line);
    match word {
        "quit" | "EOF" => Line::Quit,
        "help" => Line::Help(first_word(rest)),
        _ => match Verb::from_word(word) {
            Some(verb) => Line::Command(classic::parse(verb, rest)),
            None => dot::parse(line),
        },
    }
}

/// Split off the leading run of identifier characters.
fn split_identifier(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    (&line[..end], line[end..].trim())
}

fn first_word(text: &str) -> Option<String> {
    classic::next_token(text).map(|(word, _)| word.to_string())
}

/// Trim, strip quotes, and drop empty results.
pub(crate) fn clean_arg(raw: Option<&str>) -> Option<String> {
    raw.map(|arg| normalize::strip_quotes(arg.trim()))
        .filter(|arg| !arg.is_empty())
        .map(str::to_string)
}
