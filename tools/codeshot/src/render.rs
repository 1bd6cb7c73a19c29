//! Text renderings of a token list: 24-bit ANSI color and a plain token dump.

use std::fmt::Write as _;

use codeshot_lexer::{Color, TokenList};

/// ANSI escape sequences.
mod ansi {
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Render `tokens` with 24-bit foreground colors from each token's color
/// snapshot.
///
/// With `gutter`, every line is prefixed by its right-aligned line number,
/// as wide as the last rendered line number. Lines continued inside a
/// multi-line token (block comment, long string) get a blank gutter. Line
/// breaks are normalized to `\n`; a trailing empty line is not rendered.
pub fn render_ansi(tokens: &TokenList<'_>, gutter: bool) -> String {
    let mut lines: Vec<_> = tokens.lines().collect();
    if lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let width = lines.len().to_string().len();

    let mut out = String::with_capacity(tokens.source().len() as usize * 2);
    for (index, line) in lines.into_iter().enumerate() {
        if gutter {
            write_gutter(&mut out, Some(index + 1), width);
        }
        for token in line {
            let mut segments = line_segments(tokens.text(token));
            if let Some(first) = segments.next() {
                paint(&mut out, first, token.color);
            }
            for segment in segments {
                out.push('\n');
                if gutter {
                    write_gutter(&mut out, None, width);
                }
                paint(&mut out, segment, token.color);
            }
        }
        out.push('\n');
    }
    out
}

fn write_gutter(out: &mut String, number: Option<usize>, width: usize) {
    match number {
        Some(n) => {
            let _ = write!(out, "{}{n:>width$} |{} ", ansi::DIM, ansi::RESET);
        }
        None => {
            let _ = write!(out, "{}{:width$} |{} ", ansi::DIM, "", ansi::RESET);
        }
    }
}

/// Split `text` at `\r\n`, `\n` and lone `\r` breaks.
fn line_segments(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(at) => {
                let len = if current[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[at + len..]);
                Some(&current[..at])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn paint(out: &mut String, text: &str, color: Color) {
    if text.is_empty() {
        return;
    }
    if color.is_transparent() {
        out.push_str(text);
    } else {
        let _ = write!(
            out,
            "\x1b[38;2;{};{};{}m{text}{}",
            color.r,
            color.g,
            color.b,
            ansi::RESET
        );
    }
}

/// One line per token: kind, span and the quoted text.
pub fn dump_tokens(path: &str, tokens: &TokenList<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tokens for '{path}' ({} tokens, {} lines):",
        tokens.len(),
        tokens.line_count()
    );
    for (token, text) in tokens.iter_text() {
        let span = token.span.to_string();
        let _ = writeln!(out, "  {:<13} {span:<11} {text:?}", token.kind.name());
    }
    out
}
