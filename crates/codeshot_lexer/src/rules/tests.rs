use super::*;

fn minimal() -> RuleTableBuilder {
    RuleTable::builder("mini")
        .operators(["=", "==", "+"])
        .string_delimiters(ByteSet::from_bytes(b"\""))
        .brackets(ByteSet::from_bytes(b"()"))
}

// === ByteSet ===

#[test]
fn byte_set_membership() {
    let set = ByteSet::from_bytes(b"az_");
    assert!(set.contains(b'a'));
    assert!(set.contains(b'z'));
    assert!(set.contains(b'_'));
    assert!(!set.contains(b'b'));
    assert!(!set.contains(0));
    assert!(!set.contains(255));
}

#[test]
fn byte_set_high_bytes() {
    let set = ByteSet::from_range(250, 255);
    assert!(set.contains(255));
    assert!(set.contains(250));
    assert!(!set.contains(249));
}

#[test]
fn byte_set_algebra() {
    let a = ByteSet::from_bytes(b"abc");
    let b = ByteSet::from_bytes(b"cde");
    assert_eq!(a.intersection(b), ByteSet::from_bytes(b"c"));
    assert_eq!(a.union(b), ByteSet::from_bytes(b"abcde"));
    assert!(a.intersection(ByteSet::ascii_digits()).is_empty());
    assert_eq!(a.intersection(b).first(), Some(b'c'));
    assert_eq!(ByteSet::EMPTY.first(), None);
}

#[test]
fn ascii_classes() {
    let start = ByteSet::ascii_ident_start();
    assert!(start.contains(b'_'));
    assert!(start.contains(b'Q'));
    assert!(!start.contains(b'7'));
    assert!(ByteSet::ascii_digits().contains(b'7'));
}

// === Builder ===

#[test]
fn build_derives_match_widths() {
    let table = RuleTable::builder("t")
        .operators(["+", ">>=", "<<"])
        .line_comments(["#"])
        .block_comments([("/*", "*/"), ("{-", "-}")])
        .build();
    assert_eq!(table.max_operator_len(), 3);
    assert_eq!(table.max_comment_len(), 2);
}

#[test]
fn build_with_no_operators_has_zero_width() {
    let table = RuleTable::builder("empty").build();
    assert_eq!(table.max_operator_len(), 0);
    assert_eq!(table.max_comment_len(), 0);
}

#[test]
fn identifier_scan_covers_start_and_continue() {
    let table = RuleTable::builder("t")
        .identifier_start(ByteSet::from_bytes(b"$"))
        .identifier_continue(ByteSet::ascii_digits())
        .build();
    assert!(table.starts_identifier(b'$'));
    assert!(!table.starts_identifier(b'1'));
    assert!(table.continues_identifier(b'$'));
    assert!(table.continues_identifier(b'1'));
}

#[test]
fn directive_start_bytes_are_derived() {
    let table = RuleTable::builder("t")
        .directives(["#include", "#define", "@pragma"])
        .build();
    assert!(table.starts_directive(b'#'));
    assert!(table.starts_directive(b'@'));
    assert!(!table.starts_directive(b'i'));
    assert!(table.is_directive("#define"));
    assert!(!table.is_directive("#"));
}

#[test]
fn block_comment_close_lookup() {
    let table = RuleTable::builder("t")
        .block_comments([("/*", "*/")])
        .build();
    assert_eq!(table.block_comment_close("/*"), Some("*/"));
    assert_eq!(table.block_comment_close("*/"), None);
}

#[test]
fn set_accessors_list_members() {
    let table = RuleTable::builder("t")
        .keywords(["if", "else"])
        .operators(["=", "=="])
        .line_comments(["#", "//"])
        .build();
    fn sorted(items: Vec<&str>) -> Vec<&str> {
        let mut items = items;
        items.sort_unstable();
        items
    }
    assert_eq!(sorted(table.keywords().collect()), ["else", "if"]);
    assert_eq!(sorted(table.operators().collect()), ["=", "=="]);
    assert_eq!(sorted(table.line_comments().collect()), ["#", "//"]);
    assert_eq!(RuleTable::builder("empty").build().keywords().count(), 0);
}

#[test]
fn setters_replace_previous_values() {
    let table = RuleTable::builder("t")
        .keywords(["if"])
        .keywords(["while"])
        .build();
    assert!(!table.is_keyword("if"));
    assert!(table.is_keyword("while"));
}

// === Validation ===

#[test]
fn minimal_table_is_valid() {
    assert_eq!(minimal().build().validate(), Ok(()));
}

#[test]
fn empty_operator_rejected() {
    let table = minimal().operators(["", "+"]).build();
    assert!(matches!(
        table.validate(),
        Err(RuleTableError::EmptyMarker {
            what: "operator",
            ..
        })
    ));
}

#[test]
fn empty_block_close_rejected() {
    let table = minimal().block_comments([("/*", "")]).build();
    assert!(matches!(
        table.validate(),
        Err(RuleTableError::EmptyMarker {
            what: "block comment",
            ..
        })
    ));
}

#[test]
fn bracket_operator_overlap_rejected() {
    let table = minimal().operators(["(", "+"]).build();
    assert_eq!(
        table.validate(),
        Err(RuleTableError::BracketIsOperator {
            table: "mini".to_owned(),
            bracket: '(',
        })
    );
}

#[test]
fn multi_char_operator_starting_with_bracket_is_fine() {
    let table = minimal().operators(["(*", "+"]).build();
    assert_eq!(table.validate(), Ok(()));
}

#[test]
fn identifier_number_overlap_rejected() {
    let table = minimal()
        .identifier_start(ByteSet::ascii_ident_start().with(b'1'))
        .build();
    assert_eq!(
        table.validate(),
        Err(RuleTableError::ClassOverlap {
            table: "mini".to_owned(),
            byte: b'1',
            first: "identifier start",
            second: "number start",
        })
    );
}

#[test]
fn whitespace_in_class_rejected() {
    let table = minimal()
        .brackets(ByteSet::from_bytes(b"( "))
        .build();
    assert!(matches!(
        table.validate(),
        Err(RuleTableError::ClassOverlap {
            byte: b' ',
            first: "whitespace",
            second: "brackets",
            ..
        })
    ));
}

#[test]
fn whitespace_in_identifier_continue_rejected() {
    let table = minimal()
        .identifier_continue(ByteSet::from_bytes(b"a\t"))
        .build();
    assert!(matches!(
        table.validate(),
        Err(RuleTableError::ClassOverlap {
            second: "identifier continue",
            ..
        })
    ));
}

#[test]
fn byte_set_debug_lists_members() {
    assert_eq!(format!("{:?}", ByteSet::from_bytes(b"ba")), "{'a', 'b'}");
}
