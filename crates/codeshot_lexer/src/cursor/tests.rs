use super::Cursor;
use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof_immediately() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

// === Slicing ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("hello world");
    let mut cursor = buf.cursor();
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), "hello");
}

// === Windows ===

#[test]
fn window_within_source() {
    let buf = SourceBuffer::new(">>=b");
    let cursor = buf.cursor();
    assert_eq!(cursor.window(3), Some(">>="));
    assert_eq!(cursor.window(1), Some(">"));
}

#[test]
fn window_past_eof_is_none() {
    let buf = SourceBuffer::new(">>");
    let cursor = buf.cursor();
    assert_eq!(cursor.window(3), None);
    assert_eq!(cursor.window(2), Some(">>"));
}

#[test]
fn window_splitting_char_is_none() {
    let buf = SourceBuffer::new("é=");
    let cursor = buf.cursor();
    assert_eq!(cursor.window(1), None);
    assert_eq!(cursor.window(2), Some("é"));
}

// === Eating ===

#[test]
fn eat_while_stops_at_predicate() {
    let buf = SourceBuffer::new("aaab");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_eof_even_for_nul_predicate() {
    let buf = SourceBuffer::new("\0\0");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == 0);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

#[test]
fn advance_char_skips_multibyte() {
    let buf = SourceBuffer::new("\u{1F600}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn utf8_char_width_table() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let buf = SourceBuffer::new("# note\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_stops_before_carriage_return() {
    let buf = SourceBuffer::new("// a\r\nb");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn eat_until_newline_reaches_eof() {
    let buf = SourceBuffer::new("# tail");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_or_escape_finds_nearest() {
    let buf = SourceBuffer::new("ab\\\"c\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_or_escape(b'"'), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_quote_or_escape_reports_eof() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_or_escape(b'\''), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_past_consumes_needle() {
    let buf = SourceBuffer::new(" body */ rest");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_past("*/"));
    assert_eq!(cursor.slice_from(0), " body */");
}

#[test]
fn eat_past_missing_needle_goes_to_eof() {
    let buf = SourceBuffer::new(" body never closed");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_past("*/"));
    assert!(cursor.is_eof());
}
