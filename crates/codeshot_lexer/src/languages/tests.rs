use super::*;

#[test]
fn builtin_tables_validate() {
    for lang in Language::ALL {
        assert_eq!(lang.rules().validate(), Ok(()), "{} table", lang.name());
    }
}

#[test]
fn tables_are_built_once() {
    let first: *const RuleTable = Language::Cpp.rules();
    let second: *const RuleTable = Language::Cpp.rules();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn table_names_match_language_names() {
    for lang in Language::ALL {
        assert_eq!(lang.rules().name(), lang.name());
    }
}

#[test]
fn python_operator_width() {
    assert_eq!(Language::Python.rules().max_operator_len(), 3);
    assert!(Language::Python.rules().is_operator("//="));
    assert!(Language::Python.rules().is_operator("**="));
}

#[test]
fn javascript_operator_width() {
    assert_eq!(Language::JavaScript.rules().max_operator_len(), 4);
    assert!(Language::JavaScript.rules().is_operator(">>>="));
}

#[test]
fn python_has_no_block_comments_or_directives() {
    let rules = Language::Python.rules();
    assert!(rules.block_comments().is_empty());
    assert_eq!(rules.directives().count(), 0);
    assert!(rules.has_long_strings());
    assert_eq!(rules.max_comment_len(), 1);
}

#[test]
fn cpp_comment_markers() {
    let rules = Language::Cpp.rules();
    assert!(rules.is_line_comment("//"));
    assert_eq!(rules.block_comment_close("/*"), Some("*/"));
    assert!(rules.is_directive("#include"));
    assert!(!rules.has_long_strings());
}

#[test]
fn keyword_sets_are_language_specific() {
    assert!(Language::Python.rules().is_keyword("def"));
    assert!(!Language::Cpp.rules().is_keyword("def"));
    assert!(Language::Cpp.rules().is_keyword("constexpr"));
    assert!(Language::JavaScript.rules().is_keyword("function"));
    assert!(Language::Python.rules().is_keyword("None"));
    assert!(!Language::Python.rules().is_keyword("none"));
}

#[test]
fn javascript_identifiers_accept_dollar() {
    let rules = Language::JavaScript.rules();
    assert!(rules.starts_identifier(b'$'));
    assert!(rules.continues_identifier(b'$'));
    assert!(!Language::Python.rules().starts_identifier(b'$'));
}

#[test]
fn aliases_do_not_collide_across_languages() {
    let mut seen = std::collections::HashSet::new();
    for lang in Language::ALL {
        assert!(seen.insert(lang.name()));
        for alias in lang.aliases() {
            assert!(seen.insert(*alias), "alias `{alias}` reused");
        }
    }
}
