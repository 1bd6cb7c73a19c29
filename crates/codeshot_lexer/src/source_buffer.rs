//! Sentinel-terminated source buffer for bounds-check-light scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the cursor to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides safe padding for `peek()` near the end of the buffer.
//!
//! The buffer is the caller-owned storage every [`Token`](crate::Token)
//! span points into. A [`TokenList`](crate::TokenList) borrows it, so the
//! buffer cannot be dropped or mutated while tokens referring to it are
//! alive.

use crate::Cursor;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The storage is a `String`: NUL is a valid UTF-8 scalar value, so the
/// sentinel and padding keep the whole buffer valid UTF-8 and source slices
/// never need an unchecked conversion.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// # File Size
    ///
    /// Spans are `u32` offsets. Sources larger than `u32::MAX` bytes are
    /// accepted, but only the leading `u32::MAX` bytes (rounded down to a
    /// character boundary) are visible to the tokenizer.
    pub fn new(source: &str) -> Self {
        let source_len = clamp_len(source);
        if source_len < source.len() {
            tracing::warn!(
                len = source.len(),
                visible = source_len,
                "source exceeds u32::MAX bytes; trailing content is not tokenized"
            );
        }

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(&source[..source_len]);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns the full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

/// Largest prefix length of `source` that fits in a `u32` and ends on a
/// character boundary.
fn clamp_len(source: &str) -> usize {
    let mut len = source.len().min(u32::MAX as usize);
    while !source.is_char_boundary(len) {
        len -= 1;
    }
    len
}
