//! Table-driven lexer for syntax-colored code rendering.
//!
//! Splits source text into a lossless sequence of colored tokens. The
//! scanner is language-agnostic: everything language-specific lives in a
//! [`RuleTable`], resolved by id, alias or file extension through a
//! [`Registry`].
//!
//! # Guarantees
//!
//! - **Lossless**: token spans are contiguous and cover the source exactly.
//! - **Total**: malformed input (unterminated strings or comments, stray
//!   characters) always tokenizes; there is no lexing error.
//! - **Bounded**: every token is at least one byte long, so a source of
//!   `n` bytes produces at most `n` tokens.
//!
//! # Modules
//!
//! - [`rules`]: rule tables and their builder
//! - [`languages`]: built-in tables (Python, C++, JavaScript)
//! - [`registry`]: language lookup
//! - [`style`]: colors and the kind-to-color palette
//!
//! # Example
//!
//! ```
//! use codeshot_lexer::{lex, Palette, Registry, SourceBuffer, TokenKind};
//!
//! let registry = Registry::builtin();
//! let rules = registry.resolve("python").unwrap();
//! let source = SourceBuffer::new("x = 1");
//! let tokens = lex(&source, rules, &Palette::default());
//!
//! let kinds: Vec<TokenKind> = tokens.iter().map(|tok| tok.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Identifier);
//! assert_eq!(tokens.text(&tokens[2]), "=");
//! ```

mod cursor;
mod error;
pub mod languages;
pub mod registry;
pub mod rules;
mod source_buffer;
mod span;
pub mod style;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use error::{ColorParseError, KindParseError, LexError, RuleTableError};
pub use languages::Language;
pub use registry::Registry;
pub use rules::{BlockComment, ByteSet, RuleTable, RuleTableBuilder};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use style::{Color, Palette};
pub use token::{Token, TokenKind, TokenList};
pub use tokenizer::lex;
