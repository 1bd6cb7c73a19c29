//! Per-language lexical rule tables.
//!
//! A [`RuleTable`] is plain data: keyword, operator, comment and directive
//! sets plus byte classes for identifiers, numbers, strings and brackets.
//! The tokenizer has one code path for every language; languages differ
//! only in the table they hand it.
//!
//! Tables are built with [`RuleTableBuilder`] and never change afterwards.
//! [`RuleTable::validate`] rejects tables whose classes overlap in a way
//! that would make a dispatch branch unreachable.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::error::RuleTableError;

/// Set of byte values, one bit per byte.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteSet([u64; 4]);

impl ByteSet {
    pub const EMPTY: ByteSet = ByteSet([0; 4]);

    /// Set containing every byte of `bytes`.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Set containing every byte in `lo..=hi`.
    pub const fn from_range(lo: u8, hi: u8) -> Self {
        let mut set = Self::EMPTY;
        let mut b = lo;
        while b <= hi {
            set = set.with(b);
            if b == u8::MAX {
                break;
            }
            b += 1;
        }
        set
    }

    /// `a-z`, `A-Z` and `_`.
    pub const fn ascii_ident_start() -> Self {
        Self::from_range(b'a', b'z')
            .union(Self::from_range(b'A', b'Z'))
            .with(b'_')
    }

    /// `0-9`.
    pub const fn ascii_digits() -> Self {
        Self::from_range(b'0', b'9')
    }

    #[must_use]
    pub const fn with(self, byte: u8) -> Self {
        let mut words = self.0;
        words[(byte >> 6) as usize] |= 1u64 << (byte & 63);
        ByteSet(words)
    }

    #[must_use]
    pub const fn union(self, other: ByteSet) -> Self {
        ByteSet([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }

    #[must_use]
    pub const fn intersection(self, other: ByteSet) -> Self {
        ByteSet([
            self.0[0] & other.0[0],
            self.0[1] & other.0[1],
            self.0[2] & other.0[2],
            self.0[3] & other.0[3],
        ])
    }

    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.0[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }

    /// Smallest member, if any.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "word index < 4 and trailing_zeros < 64, so the sum is < 256"
    )]
    pub fn first(&self) -> Option<u8> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, word)| **word != 0)
            .map(|(i, word)| (i * 64) as u8 + word.trailing_zeros() as u8)
    }
}

impl std::fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries((0..=u8::MAX).filter(|b| self.contains(*b)).map(char::from))
            .finish()
    }
}

/// An `(open, close)` block comment marker pair, e.g. `/*` and `*/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockComment {
    pub open: Box<str>,
    pub close: Box<str>,
}

/// Bytes that may take part in class-driven dispatch.
const ASCII: ByteSet = ByteSet::from_range(0, 0x7F);

/// Horizontal and vertical whitespace the tokenizer handles before any
/// table-driven branch.
const WHITESPACE: ByteSet = ByteSet::from_bytes(b" \t\n\r");

/// Immutable lexical description of one language.
#[derive(Clone, Debug)]
pub struct RuleTable {
    name: Box<str>,
    keywords: FxHashSet<Box<str>>,
    operators: FxHashSet<Box<str>>,
    line_comments: FxHashSet<Box<str>>,
    block_comments: SmallVec<[BlockComment; 2]>,
    directives: FxHashSet<Box<str>>,
    number_start: ByteSet,
    number_prefix: ByteSet,
    string_delimiters: ByteSet,
    long_strings: bool,
    ident_start: ByteSet,
    ident_continue: ByteSet,
    brackets: ByteSet,
    // Derived at build time.
    ident_body: ByteSet,
    directive_start: ByteSet,
    max_operator_len: u32,
    max_comment_len: u32,
}

impl RuleTable {
    /// Start building a table for `name`.
    pub fn builder(name: &str) -> RuleTableBuilder {
        RuleTableBuilder::new(name)
    }

    /// Canonical language name.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    #[inline]
    pub fn is_operator(&self, text: &str) -> bool {
        self.operators.contains(text)
    }

    #[inline]
    pub fn is_line_comment(&self, text: &str) -> bool {
        self.line_comments.contains(text)
    }

    #[inline]
    pub fn is_directive(&self, text: &str) -> bool {
        self.directives.contains(text)
    }

    /// Close marker of the block comment opened by `open`, if `open` is one.
    #[inline]
    pub fn block_comment_close(&self, open: &str) -> Option<&str> {
        self.block_comments
            .iter()
            .find(|pair| &*pair.open == open)
            .map(|pair| &*pair.close)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| &**k)
    }

    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|o| &**o)
    }

    pub fn line_comments(&self) -> impl Iterator<Item = &str> {
        self.line_comments.iter().map(|c| &**c)
    }

    pub fn block_comments(&self) -> &[BlockComment] {
        &self.block_comments
    }

    pub fn directives(&self) -> impl Iterator<Item = &str> {
        self.directives.iter().map(|d| &**d)
    }

    #[inline]
    pub fn starts_identifier(&self, byte: u8) -> bool {
        self.ident_start.contains(byte)
    }

    /// Start or continue byte: the identifier scan runs over the union.
    #[inline]
    pub fn continues_identifier(&self, byte: u8) -> bool {
        self.ident_body.contains(byte)
    }

    #[inline]
    pub fn starts_number(&self, byte: u8) -> bool {
        self.number_start.contains(byte)
    }

    #[inline]
    pub fn is_number_prefix(&self, byte: u8) -> bool {
        self.number_prefix.contains(byte)
    }

    #[inline]
    pub fn is_string_delimiter(&self, byte: u8) -> bool {
        self.string_delimiters.contains(byte)
    }

    /// Whether a tripled delimiter (`"""`) opens a string closed only by the
    /// same triple.
    #[inline]
    pub fn has_long_strings(&self) -> bool {
        self.long_strings
    }

    #[inline]
    pub fn is_bracket(&self, byte: u8) -> bool {
        self.brackets.contains(byte)
    }

    /// First byte of some directive.
    #[inline]
    pub fn starts_directive(&self, byte: u8) -> bool {
        self.directive_start.contains(byte)
    }

    /// Widest operator lexeme in bytes; bounds the operator lookahead.
    #[inline]
    pub fn max_operator_len(&self) -> u32 {
        self.max_operator_len
    }

    /// Widest comment opener (line or block) in bytes; bounds the comment lookahead.
    #[inline]
    pub fn max_comment_len(&self) -> u32 {
        self.max_comment_len
    }

    /// Check that every dispatch branch stays reachable.
    ///
    /// Rejects empty markers, bracket characters that are also
    /// single-character operators, and overlapping first-byte classes
    /// (whitespace, identifier start, number start, string delimiter,
    /// bracket).
    pub fn validate(&self) -> Result<(), RuleTableError> {
        let empty = |what: &'static str| RuleTableError::EmptyMarker {
            table: self.name.to_string(),
            what,
        };
        if self.operators.iter().any(|op| op.is_empty()) {
            return Err(empty("operator"));
        }
        if self.line_comments.iter().any(|c| c.is_empty()) {
            return Err(empty("line comment"));
        }
        if self
            .block_comments
            .iter()
            .any(|pair| pair.open.is_empty() || pair.close.is_empty())
        {
            return Err(empty("block comment"));
        }
        if self.directives.iter().any(|d| d.is_empty()) {
            return Err(empty("directive"));
        }

        let classes: [(&'static str, ByteSet); 5] = [
            ("whitespace", WHITESPACE),
            ("identifier start", self.ident_start),
            ("number start", self.number_start),
            ("string delimiters", self.string_delimiters),
            ("brackets", self.brackets),
        ];
        for (i, (first, a)) in classes.iter().enumerate() {
            for (second, b) in &classes[i + 1..] {
                if let Some(byte) = a.intersection(*b).first() {
                    return Err(RuleTableError::ClassOverlap {
                        table: self.name.to_string(),
                        byte,
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        if let Some(byte) = WHITESPACE.intersection(self.ident_continue).first() {
            return Err(RuleTableError::ClassOverlap {
                table: self.name.to_string(),
                byte,
                first: "whitespace",
                second: "identifier continue",
            });
        }

        if let Some(bracket) = (0..=u8::MAX)
            .filter(|b| self.brackets.contains(*b))
            .map(char::from)
            .find(|c| {
                let mut utf8 = [0; 4];
                self.operators.contains(&*c.encode_utf8(&mut utf8))
            })
        {
            return Err(RuleTableError::BracketIsOperator {
                table: self.name.to_string(),
                bracket,
            });
        }

        Ok(())
    }
}

/// Builder for [`RuleTable`].
///
/// Every setter replaces the previous value of its field.
#[derive(Clone, Debug)]
pub struct RuleTableBuilder {
    name: Box<str>,
    keywords: FxHashSet<Box<str>>,
    operators: FxHashSet<Box<str>>,
    line_comments: FxHashSet<Box<str>>,
    block_comments: SmallVec<[BlockComment; 2]>,
    directives: FxHashSet<Box<str>>,
    number_start: ByteSet,
    number_prefix: ByteSet,
    string_delimiters: ByteSet,
    long_strings: bool,
    ident_start: ByteSet,
    ident_continue: ByteSet,
    brackets: ByteSet,
}

fn to_set<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> FxHashSet<Box<str>> {
    items.into_iter().map(|s| Box::from(s.as_ref())).collect()
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "lexemes are a handful of bytes"
)]
fn max_len<'a>(items: impl Iterator<Item = &'a str>) -> u32 {
    items.map(|s| s.len() as u32).max().unwrap_or(0)
}

impl RuleTableBuilder {
    /// New builder with ASCII identifier and digit classes and nothing else.
    pub fn new(name: &str) -> Self {
        RuleTableBuilder {
            name: Box::from(name),
            keywords: FxHashSet::default(),
            operators: FxHashSet::default(),
            line_comments: FxHashSet::default(),
            block_comments: SmallVec::new(),
            directives: FxHashSet::default(),
            number_start: ByteSet::ascii_digits(),
            number_prefix: ByteSet::EMPTY,
            string_delimiters: ByteSet::EMPTY,
            long_strings: false,
            ident_start: ByteSet::ascii_ident_start(),
            ident_continue: ByteSet::ascii_ident_start().union(ByteSet::ascii_digits()),
            brackets: ByteSet::EMPTY,
        }
    }

    #[must_use]
    pub fn keywords<S: AsRef<str>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.keywords = to_set(items);
        self
    }

    #[must_use]
    pub fn operators<S: AsRef<str>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.operators = to_set(items);
        self
    }

    #[must_use]
    pub fn line_comments<S: AsRef<str>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.line_comments = to_set(items);
        self
    }

    #[must_use]
    pub fn block_comments<S: AsRef<str>>(
        mut self,
        pairs: impl IntoIterator<Item = (S, S)>,
    ) -> Self {
        self.block_comments = pairs
            .into_iter()
            .map(|(open, close)| BlockComment {
                open: Box::from(open.as_ref()),
                close: Box::from(close.as_ref()),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn directives<S: AsRef<str>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.directives = to_set(items);
        self
    }

    #[must_use]
    pub fn number_start(mut self, set: ByteSet) -> Self {
        self.number_start = set;
        self
    }

    #[must_use]
    pub fn number_prefixes(mut self, set: ByteSet) -> Self {
        self.number_prefix = set;
        self
    }

    #[must_use]
    pub fn string_delimiters(mut self, set: ByteSet) -> Self {
        self.string_delimiters = set;
        self
    }

    #[must_use]
    pub fn long_strings(mut self, enabled: bool) -> Self {
        self.long_strings = enabled;
        self
    }

    #[must_use]
    pub fn identifier_start(mut self, set: ByteSet) -> Self {
        self.ident_start = set;
        self
    }

    #[must_use]
    pub fn identifier_continue(mut self, set: ByteSet) -> Self {
        self.ident_continue = set;
        self
    }

    #[must_use]
    pub fn brackets(mut self, set: ByteSet) -> Self {
        self.brackets = set;
        self
    }

    /// Freeze the table, deriving lookahead widths and helper classes.
    ///
    /// Byte classes keep their ASCII members only, so every class-driven
    /// token ends on a character boundary; non-ASCII text is reached through
    /// string-valued rules (operators, markers) or falls back to `Unknown`.
    ///
    /// Does not validate; call [`RuleTable::validate`] (the registry does
    /// so on registration).
    pub fn build(self) -> RuleTable {
        let max_operator_len = max_len(self.operators.iter().map(|o| &**o));
        let max_comment_len = max_len(
            self.line_comments
                .iter()
                .map(|c| &**c)
                .chain(self.block_comments.iter().map(|pair| &*pair.open)),
        );
        let directive_start = self
            .directives
            .iter()
            .filter_map(|d| d.as_bytes().first().copied())
            .fold(ByteSet::EMPTY, ByteSet::with);

        let ident_start = self.ident_start.intersection(ASCII);
        let ident_continue = self.ident_continue.intersection(ASCII);

        RuleTable {
            name: self.name,
            keywords: self.keywords,
            operators: self.operators,
            line_comments: self.line_comments,
            block_comments: self.block_comments,
            directives: self.directives,
            number_start: self.number_start.intersection(ASCII),
            number_prefix: self.number_prefix.intersection(ASCII),
            string_delimiters: self.string_delimiters.intersection(ASCII),
            long_strings: self.long_strings,
            ident_start,
            ident_continue,
            brackets: self.brackets.intersection(ASCII),
            ident_body: ident_start.union(ident_continue),
            directive_start,
            max_operator_len,
            max_comment_len,
        }
    }
}

#[cfg(test)]
mod tests;
