use pretty_assertions::assert_eq;

use super::*;
use crate::languages::Language;
use crate::lex;

fn lex_python(buf: &SourceBuffer) -> TokenList<'_> {
    lex(buf, Language::Python.rules(), &Palette::default())
}

#[test]
fn kind_names_round_trip() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_name(kind.name()), Ok(kind));
    }
}

#[test]
fn kind_from_name_ignores_case() {
    assert_eq!(TokenKind::from_name("Comment-Line"), Ok(TokenKind::CommentLine));
    assert_eq!(
        TokenKind::from_name("comment"),
        Err(KindParseError {
            name: "comment".to_owned()
        })
    );
}

#[test]
fn kind_index_matches_all_order() {
    for (i, kind) in TokenKind::ALL.into_iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn trivia_kinds() {
    let trivia: Vec<_> = TokenKind::ALL.into_iter().filter(|k| k.is_trivia()).collect();
    assert_eq!(
        trivia,
        [TokenKind::Space, TokenKind::Tab, TokenKind::Newline]
    );
}

#[test]
fn text_slices_source() {
    let buf = SourceBuffer::new("x += 10");
    let tokens = lex_python(&buf);
    let texts: Vec<&str> = tokens.iter().map(|tok| tokens.text(tok)).collect();
    assert_eq!(texts, ["x", " ", "+=", " ", "10"]);
}

#[test]
fn line_count_and_gutter() {
    let buf = SourceBuffer::new("a\nb\n");
    let tokens = lex_python(&buf);
    assert_eq!(tokens.line_count(), 3);
    assert_eq!(tokens.gutter_width(), 1);

    let source = "x\n".repeat(120);
    let buf = SourceBuffer::new(&source);
    let tokens = lex_python(&buf);
    assert_eq!(tokens.line_count(), 121);
    assert_eq!(tokens.gutter_width(), 3);
}

#[test]
fn lines_split_on_newlines() {
    let buf = SourceBuffer::new("if x:\n\n    y\r\nz");
    let tokens = lex_python(&buf);
    let lines: Vec<Vec<&str>> = tokens
        .lines()
        .map(|line| line.iter().map(|tok| tokens.text(tok)).collect())
        .collect();
    assert_eq!(
        lines,
        vec![
            vec!["if", " ", "x", ":"],
            vec![],
            vec!["    ", "y"],
            vec!["z"],
        ]
    );
    assert_eq!(lines.len(), tokens.line_count());
}

#[test]
fn multiline_token_does_not_split_lines() {
    let buf = SourceBuffer::new("'''a\nb'''\nc");
    let tokens = lex_python(&buf);
    assert_eq!(tokens.line_count(), 2);
}

#[test]
fn recolor_refreshes_snapshots() {
    let buf = SourceBuffer::new("def f");
    let mut palette = Palette::default();
    let mut tokens = lex(&buf, Language::Python.rules(), &palette);
    assert_eq!(tokens[0].color, Color::BLUE);

    palette.set(TokenKind::Keyword, Color::RED);
    // Existing snapshots are untouched until recolored.
    assert_eq!(tokens[0].color, Color::BLUE);

    tokens.recolor(&palette);
    assert_eq!(tokens[0].color, Color::RED);
    assert_eq!(tokens[2].color, palette.get(TokenKind::Identifier));
}

#[test]
fn debug_is_compact() {
    let buf = SourceBuffer::new("a b");
    assert_eq!(format!("{:?}", lex_python(&buf)), "TokenList(3 tokens)");
}

#[test]
fn into_tokens_keeps_order() {
    let buf = SourceBuffer::new("a b");
    let kinds: Vec<TokenKind> = lex_python(&buf)
        .into_tokens()
        .into_iter()
        .map(|tok| tok.kind)
        .collect();
    assert_eq!(
        kinds,
        [TokenKind::Identifier, TokenKind::Space, TokenKind::Identifier]
    );
}
