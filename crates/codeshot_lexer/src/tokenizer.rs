//! Table-driven scanner producing a lossless token stream.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] once, emitting one
//! `(kind, span)` pair per dispatch step. Every step consumes at least one
//! byte and the cursor never moves backwards, so a source of `n` bytes
//! yields at most `n` tokens and concatenating the spans reproduces the
//! source exactly.
//!
//! # Dispatch order
//!
//! First match wins:
//!
//! 1. whitespace (space run, tab run, one line break)
//! 2. identifier or keyword
//! 3. number
//! 4. string
//! 5. line or block comment (longest marker)
//! 6. preprocessor directive
//! 7. operator (longest lexeme)
//! 8. bracket
//! 9. one unknown character
//!
//! Malformed input never fails: unterminated strings and block comments
//! run to EOF, and unclaimed characters become [`TokenKind::Unknown`].

use crate::cursor::Cursor;
use crate::rules::RuleTable;
use crate::style::Palette;
use crate::token::{Token, TokenKind, TokenList};
use crate::{SourceBuffer, Span};

/// Tokenize `source` with `rules`, coloring tokens from `palette`.
///
/// Token colors are a snapshot of `palette` taken now; see
/// [`TokenList::recolor`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(language = rules.name(), len = source.len())
)]
pub fn lex<'src>(
    source: &'src SourceBuffer,
    rules: &RuleTable,
    palette: &Palette,
) -> TokenList<'src> {
    let mut scanner = Scanner::new(source.cursor(), rules);
    let mut tokens = Vec::with_capacity(source.len() as usize / 4);
    while let Some((kind, span)) = scanner.next_token() {
        tokens.push(Token::new(span, kind, palette.get(kind)));
    }
    tracing::debug!(tokens = tokens.len(), "lex complete");
    TokenList::new(source, tokens)
}

/// Single-pass scanner over one buffer.
struct Scanner<'a> {
    cursor: Cursor<'a>,
    rules: &'a RuleTable,
}

impl<'a> Scanner<'a> {
    fn new(cursor: Cursor<'a>, rules: &'a RuleTable) -> Self {
        Scanner { cursor, rules }
    }

    /// Produce the next token, or `None` at EOF.
    fn next_token(&mut self) -> Option<(TokenKind, Span)> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            b' ' => self.run(b' ', TokenKind::Space),
            b'\t' => self.run(b'\t', TokenKind::Tab),
            b'\n' => self.single(TokenKind::Newline),
            b'\r' => self.carriage_return(),
            byte => self.table_driven(byte),
        };
        debug_assert!(self.cursor.pos() > start, "scanner made no progress");
        Some((kind, Span::new(start, self.cursor.pos())))
    }

    fn table_driven(&mut self, byte: u8) -> TokenKind {
        let rules = self.rules;
        if rules.starts_identifier(byte) {
            return self.identifier();
        }
        if rules.starts_number(byte) {
            return self.number();
        }
        if rules.is_string_delimiter(byte) {
            return self.string(byte);
        }
        if let Some(kind) = self.comment() {
            return kind;
        }
        if rules.starts_directive(byte) {
            if let Some(kind) = self.directive() {
                return kind;
            }
        }
        if let Some(kind) = self.operator() {
            return kind;
        }
        if rules.is_bracket(byte) {
            return self.single(TokenKind::Bracket);
        }
        self.unknown()
    }

    // ─── Whitespace ─────────────────────────────────────────────

    /// Run of one repeated byte.
    fn run(&mut self, byte: u8, kind: TokenKind) -> TokenKind {
        self.cursor.eat_while(|b| b == byte);
        kind
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `\r\n` is one line break; a lone `\r` is a line break on its own.
    fn carriage_return(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        TokenKind::Newline
    }

    // ─── Identifiers ────────────────────────────────────────────

    fn identifier(&mut self) -> TokenKind {
        let rules = self.rules;
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(|b| rules.continues_identifier(b));
        if rules.is_keyword(self.cursor.slice_from(start)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    // ─── Numbers ────────────────────────────────────────────────

    /// Digits with at most one `.`; or `0` + base prefix + hex digits.
    fn number(&mut self) -> TokenKind {
        let first = self.cursor.current();
        self.cursor.advance();

        // `peek` past a prefix is only in bounds before the sentinel.
        if first == b'0'
            && !self.cursor.is_eof()
            && self.rules.is_number_prefix(self.cursor.current())
            && self.cursor.peek().is_ascii_hexdigit()
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit());
            return TokenKind::NumberLiteral;
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && !self.cursor.is_eof() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        TokenKind::NumberLiteral
    }

    // ─── Strings ────────────────────────────────────────────────

    fn string(&mut self, quote: u8) -> TokenKind {
        let triple = [quote; 3];
        if self.rules.has_long_strings()
            && self.cursor.window(3).map(str::as_bytes) == Some(&triple[..])
        {
            return self.long_string(quote, &triple);
        }

        self.cursor.advance(); // opening quote
        loop {
            let found = self.cursor.skip_to_quote_or_escape(quote);
            if self.cursor.is_eof() {
                tracing::trace!(end = self.cursor.pos(), "unterminated string literal");
                break;
            }
            self.cursor.advance();
            if found == quote {
                break;
            }
            self.escaped_char();
        }
        TokenKind::StringLiteral
    }

    /// String opened by a tripled quote; only the same triple closes it.
    fn long_string(&mut self, quote: u8, triple: &[u8; 3]) -> TokenKind {
        self.cursor.advance_n(3);
        loop {
            let found = self.cursor.skip_to_quote_or_escape(quote);
            if self.cursor.is_eof() {
                tracing::trace!(end = self.cursor.pos(), "unterminated long string literal");
                break;
            }
            if found == quote && self.cursor.window(3).map(str::as_bytes) == Some(&triple[..]) {
                self.cursor.advance_n(3);
                break;
            }
            self.cursor.advance();
            if found != quote {
                self.escaped_char();
            }
        }
        TokenKind::StringLiteral
    }

    /// Consume the character after a backslash, if any. Never validated.
    fn escaped_char(&mut self) {
        if !self.cursor.is_eof() {
            self.cursor.advance_char();
        }
    }

    // ─── Comments ───────────────────────────────────────────────

    /// Longest comment marker at the cursor, widest window first.
    fn comment(&mut self) -> Option<TokenKind> {
        let rules = self.rules;
        for width in (1..=rules.max_comment_len()).rev() {
            let Some(marker) = self.cursor.window(width) else {
                continue;
            };
            if rules.is_line_comment(marker) {
                self.cursor.advance_n(width);
                self.cursor.eat_until_newline_or_eof();
                return Some(TokenKind::CommentLine);
            }
            if let Some(close) = rules.block_comment_close(marker) {
                self.cursor.advance_n(width);
                // No nesting: the first close marker ends the comment.
                if !self.cursor.eat_past(close) {
                    tracing::trace!(end = self.cursor.pos(), "unterminated block comment");
                }
                return Some(TokenKind::CommentBlock);
            }
        }
        None
    }

    // ─── Directives ─────────────────────────────────────────────

    /// Marker character plus an identifier run, checked as a whole.
    fn directive(&mut self) -> Option<TokenKind> {
        let rules = self.rules;
        let mut ahead = self.cursor;
        ahead.advance_char();
        ahead.eat_while(|b| rules.continues_identifier(b));
        if rules.is_directive(ahead.slice_from(self.cursor.pos())) {
            self.cursor = ahead;
            Some(TokenKind::Directive)
        } else {
            None
        }
    }

    // ─── Operators ──────────────────────────────────────────────

    /// Longest operator lexeme at the cursor, widest window first.
    fn operator(&mut self) -> Option<TokenKind> {
        let rules = self.rules;
        for width in (1..=rules.max_operator_len()).rev() {
            if self.cursor.window(width).is_some_and(|op| rules.is_operator(op)) {
                self.cursor.advance_n(width);
                return Some(TokenKind::Operator);
            }
        }
        None
    }

    // ─── Fallback ───────────────────────────────────────────────

    fn unknown(&mut self) -> TokenKind {
        self.cursor.advance_char();
        TokenKind::Unknown
    }
}
