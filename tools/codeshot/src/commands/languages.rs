//! The `languages` command.

use std::fmt::Write as _;

use codeshot_lexer::{Language, Registry};

/// Print every registered language with its aliases, extensions and rule
/// table summary.
pub fn list_languages() {
    print!("{}", language_summary(&Registry::builtin()));
}

/// One line per registered language. Keyword and operator sets are
/// reported by size; comment markers are listed sorted.
pub(super) fn language_summary(registry: &Registry) -> String {
    let mut out = String::new();
    for name in registry.languages() {
        let _ = write!(out, "  {name:<12}");
        if let Some(lang) = Language::ALL.into_iter().find(|lang| lang.name() == name) {
            let _ = write!(
                out,
                " aliases: {:<20} extensions: {:<16}",
                lang.aliases().join(", "),
                lang.extensions().join(", ")
            );
        }
        if let Ok(rules) = registry.resolve(name) {
            let mut comments: Vec<&str> = rules.line_comments().collect();
            comments.sort_unstable();
            comments.extend(rules.block_comments().iter().map(|block| &*block.open));
            let _ = write!(
                out,
                " keywords: {:<3} operators: {:<3} comments: {}",
                rules.keywords().count(),
                rules.operators().count(),
                comments.join(" ")
            );
        }
        out.push('\n');
    }
    out
}
