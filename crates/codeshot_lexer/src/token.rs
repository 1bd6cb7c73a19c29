//! Token model: kinds, tokens and the per-lex token list.
//!
//! A [`Token`] is a `(span, kind, color)` triple. It never owns source
//! text; the [`TokenList`] that produced it borrows the caller's
//! [`SourceBuffer`] and hands out `&str` views on request.
//!
//! # Lifetime contract
//!
//! Spans are only meaningful against the exact buffer they were lexed
//! from. `TokenList<'src>` holds a shared borrow of that buffer, so the
//! buffer cannot be mutated or freed while the list is alive. Bare
//! [`Token`] values copied out of a list carry no such guarantee: resolving
//! them against a different buffer is a logic error (slicing may panic or
//! yield unrelated text).

use std::fmt;

use crate::error::KindParseError;
use crate::style::{Color, Palette};
use crate::{SourceBuffer, Span};

/// Lexical category of a token.
///
/// The discriminant doubles as the index into a [`Palette`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// Reserved word from the rule table's keyword set.
    Keyword,
    /// Identifier-shaped text that is not a keyword.
    Identifier,
    /// Numeric literal (`42`, `3.14`, `0xFF`).
    NumberLiteral,
    /// Operator lexeme from the rule table, longest match.
    Operator,
    /// Single bracket character.
    Bracket,
    /// Comment running to end of line (newline excluded).
    CommentLine,
    /// Delimited comment, possibly unterminated (runs to EOF).
    CommentBlock,
    /// Quoted string, possibly unterminated (runs to EOF).
    StringLiteral,
    /// Preprocessor directive (`#include`, `#define`, ...).
    Directive,
    /// Run of spaces.
    Space,
    /// Run of tabs.
    Tab,
    /// A single line break (`\n`, `\r\n` or a lone `\r`).
    Newline,
    /// One character no rule claims.
    Unknown,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = 13;

    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::NumberLiteral,
        TokenKind::Operator,
        TokenKind::Bracket,
        TokenKind::CommentLine,
        TokenKind::CommentBlock,
        TokenKind::StringLiteral,
        TokenKind::Directive,
        TokenKind::Space,
        TokenKind::Tab,
        TokenKind::Newline,
        TokenKind::Unknown,
    ];

    /// Palette slot of this kind.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name, used by host configuration (`--color keyword=...`).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::NumberLiteral => "number",
            TokenKind::Operator => "operator",
            TokenKind::Bracket => "bracket",
            TokenKind::CommentLine => "comment-line",
            TokenKind::CommentBlock => "comment-block",
            TokenKind::StringLiteral => "string",
            TokenKind::Directive => "directive",
            TokenKind::Space => "space",
            TokenKind::Tab => "tab",
            TokenKind::Newline => "newline",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Parse a kind from its [`name()`](Self::name), ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, KindParseError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| KindParseError {
                name: name.to_owned(),
            })
    }

    /// Whitespace kinds carry no visible glyphs.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Tab | TokenKind::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(TokenKind::Unknown as usize + 1 == TokenKind::COUNT);

/// A lexed token.
///
/// `color` is a snapshot of the palette at lex time. Later palette edits
/// do not reach existing tokens until [`TokenList::recolor`] is called.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
    pub color: Color,
}

impl Token {
    #[inline]
    pub const fn new(span: Span, kind: TokenKind, color: Color) -> Self {
        Token { span, kind, color }
    }
}

/// Size assertion: Span (8) + kind (1) + Color (4), padded to 16.
const _: () = assert!(std::mem::size_of::<Token>() <= 16);

/// Ordered tokens produced by one [`lex`](crate::lex) call.
///
/// Borrows the source buffer the tokens were lexed from.
#[derive(Clone)]
pub struct TokenList<'src> {
    source: &'src SourceBuffer,
    tokens: Vec<Token>,
}

impl<'src> TokenList<'src> {
    pub(crate) fn new(source: &'src SourceBuffer, tokens: Vec<Token>) -> Self {
        TokenList { source, tokens }
    }

    /// The buffer these tokens index into.
    pub fn source(&self) -> &'src SourceBuffer {
        self.source
    }

    /// Source text covered by `token`.
    #[inline]
    pub fn text(&self, token: &Token) -> &'src str {
        let source: &'src str = self.source.as_str();
        &source[token.span.to_range()]
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no tokens were produced (empty source).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Iterate over `(token, text)` pairs.
    pub fn iter_text(&self) -> impl Iterator<Item = (&Token, &'src str)> + '_ {
        self.tokens.iter().map(move |tok| (tok, self.text(tok)))
    }

    /// Refresh every token's color snapshot from `palette`.
    ///
    /// Re-theming costs one pass over the tokens; the source is not rescanned.
    pub fn recolor(&mut self, palette: &Palette) {
        for token in &mut self.tokens {
            token.color = palette.get(token.kind);
        }
    }

    /// Number of lines: one more than the number of `Newline` tokens.
    pub fn line_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|tok| tok.kind == TokenKind::Newline)
            .count()
            + 1
    }

    /// Decimal digits needed to print the largest line number.
    pub fn gutter_width(&self) -> usize {
        let mut lines = self.line_count();
        let mut digits = 1;
        while lines >= 10 {
            lines /= 10;
            digits += 1;
        }
        digits
    }

    /// Iterate over lines as token slices, `Newline` tokens excluded.
    ///
    /// Always yields [`line_count()`](Self::line_count) slices; empty lines
    /// yield empty slices.
    pub fn lines(&self) -> impl Iterator<Item = &[Token]> + '_ {
        self.tokens.split(|tok| tok.kind == TokenKind::Newline)
    }

    /// Consume the list, keeping only the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Debug for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl std::ops::Index<usize> for TokenList<'_> {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList<'_> {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
