//! Colors and the kind-to-color palette.
//!
//! The palette is plain data: hosts own it, pass it to [`lex`](crate::lex)
//! by reference and mutate it with [`Palette::set`]. Nothing in this crate
//! keeps a global palette, and nothing here locks; a host that shares one
//! palette across threads serializes writes itself.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::TokenKind;

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent; used for whitespace.
    pub const BLANK: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 128, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Returns `true` if the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError {
                text: text.to_owned(),
            });
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorParseError {
                text: text.to_owned(),
            })
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Mapping from [`TokenKind`] to [`Color`].
///
/// Reads and writes are O(1) array accesses indexed by the kind's
/// discriminant. Changing the palette never requires re-lexing: renderers
/// either read [`get`](Self::get) at draw time or refresh token snapshots
/// with [`TokenList::recolor`](crate::TokenList::recolor).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; TokenKind::COUNT],
}

impl Palette {
    /// Palette with every kind mapped to `color`.
    pub const fn uniform(color: Color) -> Self {
        Palette {
            colors: [color; TokenKind::COUNT],
        }
    }

    /// Color currently assigned to `kind`.
    #[inline]
    pub fn get(&self, kind: TokenKind) -> Color {
        self.colors[kind.index()]
    }

    /// Overwrite the color assigned to `kind`.
    #[inline]
    pub fn set(&mut self, kind: TokenKind, color: Color) {
        self.colors[kind.index()] = color;
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, kind: TokenKind, color: Color) -> Self {
        self.set(kind, color);
        self
    }

    /// Iterate over `(kind, color)` in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, Color)> + '_ {
        TokenKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::uniform(Color::WHITE)
            .with(TokenKind::Keyword, Color::BLUE)
            .with(TokenKind::NumberLiteral, Color::GREEN)
            .with(TokenKind::Operator, Color::YELLOW)
            .with(TokenKind::CommentLine, Color::GRAY)
            .with(TokenKind::CommentBlock, Color::GRAY)
            .with(TokenKind::StringLiteral, Color::RED)
            .with(TokenKind::Directive, Color::ORANGE)
            .with(TokenKind::Space, Color::BLANK)
            .with(TokenKind::Tab, Color::BLANK)
            .with(TokenKind::Newline, Color::BLANK)
            .with(TokenKind::Unknown, Color::MAGENTA)
    }
}
