//! Error types.
//!
//! Malformed source is never an error: unterminated literals and stray
//! characters become tokens. Errors only describe configuration problems
//! found before any scanning starts.

use thiserror::Error;

/// Failure to obtain a rule table for a requested language.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// No rule table is registered under this id, alias or extension.
    #[error("unsupported language `{language}`")]
    UnsupportedLanguage { language: String },
}

/// A rule table that would make the tokenizer's dispatch ambiguous.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleTableError {
    /// An operator, comment marker or directive is the empty string.
    #[error("`{table}`: empty {what} marker")]
    EmptyMarker { table: String, what: &'static str },
    /// A bracket character is also a single-character operator, so the
    /// bracket branch could never match it.
    #[error("`{table}`: bracket `{bracket}` is also an operator")]
    BracketIsOperator { table: String, bracket: char },
    /// A byte belongs to two character classes whose dispatch branches
    /// would shadow one another.
    #[error("`{table}`: byte {byte:#04x} is in both {first} and {second}")]
    ClassOverlap {
        table: String,
        byte: u8,
        first: &'static str,
        second: &'static str,
    },
    /// A language id or alias is already taken in the registry.
    #[error("language id `{id}` is already registered")]
    DuplicateLanguage { id: String },
}

/// Malformed hex color.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid color `{text}`: expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError {
    pub text: String,
}

/// Unknown token kind name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown token kind `{name}`")]
pub struct KindParseError {
    pub name: String,
}
