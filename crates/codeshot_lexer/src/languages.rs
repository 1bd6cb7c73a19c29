//! Built-in rule tables.
//!
//! Each table is built once per process on first use and shared read-only
//! afterwards.

use std::sync::OnceLock;

use crate::rules::{ByteSet, RuleTable};

/// Languages with a baked-in rule table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Cpp,
    JavaScript,
}

const BRACKETS: ByteSet = ByteSet::from_bytes(b"()[]{}");
const QUOTES: ByteSet = ByteSet::from_bytes(b"\"'");

impl Language {
    pub const ALL: [Language; 3] = [Language::Python, Language::Cpp, Language::JavaScript];

    /// Canonical registry id.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
        }
    }

    /// Alternative ids accepted by the registry.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "python3"],
            Language::Cpp => &["c", "c++", "cxx"],
            Language::JavaScript => &["js", "ecmascript"],
        }
    }

    /// File extensions (without the dot) mapped to this language.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyi", "pyw"],
            Language::Cpp => &["c", "h", "cc", "cpp", "cxx", "hh", "hpp", "hxx", "ino"],
            Language::JavaScript => &["js", "mjs", "cjs", "jsx"],
        }
    }

    /// The baked rule table.
    pub fn rules(self) -> &'static RuleTable {
        static PYTHON: OnceLock<RuleTable> = OnceLock::new();
        static CPP: OnceLock<RuleTable> = OnceLock::new();
        static JAVASCRIPT: OnceLock<RuleTable> = OnceLock::new();

        match self {
            Language::Python => PYTHON.get_or_init(python),
            Language::Cpp => CPP.get_or_init(cpp),
            Language::JavaScript => JAVASCRIPT.get_or_init(javascript),
        }
    }
}

fn python() -> RuleTable {
    RuleTable::builder(Language::Python.name())
        .keywords([
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ])
        .operators([
            "+", "-", "*", "/", "//", "%", "**", "@", "=", "<", ">", "!", "&", "|", "^", "~",
            ">>", "<<", ".", ",", ":", ";", ":=", "<=", ">=", "==", "!=", "->", "+=", "-=",
            "*=", "/=", "//=", "**=", "%=", "@=", "&=", "|=", "^=", ">>=", "<<=",
        ])
        .line_comments(["#"])
        .number_prefixes(ByteSet::from_bytes(b"bBoOxX"))
        .string_delimiters(QUOTES)
        .long_strings(true)
        .brackets(BRACKETS)
        .build()
}

fn cpp() -> RuleTable {
    RuleTable::builder(Language::Cpp.name())
        .keywords([
            "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool",
            "break", "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class",
            "compl", "concept", "const", "consteval", "constexpr", "constinit", "const_cast",
            "continue", "co_await", "co_return", "co_yield", "decltype", "default", "delete",
            "do", "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern",
            "false", "final", "float", "for", "friend", "goto", "if", "inline", "int", "long",
            "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator",
            "or", "or_eq", "override", "private", "protected", "public", "register",
            "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
            "static_assert", "static_cast", "struct", "switch", "template", "this",
            "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
            "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor",
            "xor_eq",
        ])
        .operators([
            "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ".", ",",
            ":", ";", ">>", "<<", "<=", ">=", "==", "!=", "&&", "||", "++", "--", "->", "::",
            ".*", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", ">>=", "<<=", "<=>", "->*",
            "...",
        ])
        .line_comments(["//"])
        .block_comments([("/*", "*/")])
        .directives([
            "#include", "#define", "#undef", "#if", "#ifdef", "#ifndef", "#elif", "#else",
            "#endif", "#pragma", "#error", "#line",
        ])
        .number_prefixes(ByteSet::from_bytes(b"bBxX"))
        .string_delimiters(QUOTES)
        .brackets(BRACKETS)
        .build()
}

fn javascript() -> RuleTable {
    let ident_start = ByteSet::ascii_ident_start().with(b'$');
    RuleTable::builder(Language::JavaScript.name())
        .keywords([
            "async", "await", "break", "case", "catch", "class", "const", "continue",
            "debugger", "default", "delete", "do", "else", "export", "extends", "false",
            "finally", "for", "function", "if", "import", "in", "instanceof", "let", "new",
            "null", "of", "return", "static", "super", "switch", "this", "throw", "true", "try",
            "typeof", "undefined", "var", "void", "while", "with", "yield",
        ])
        .operators([
            "+", "-", "*", "/", "%", "**", "=", "<", ">", "!", "&", "|", "^", "~", "?", ".",
            ",", ":", ";", "==", "!=", "===", "!==", "<=", ">=", "&&", "||", "??", "?.", "++",
            "--", "=>", "<<", ">>", ">>>", "...", "+=", "-=", "*=", "/=", "%=", "**=", "&=",
            "|=", "^=", "<<=", ">>=", ">>>=", "&&=", "||=", "??=",
        ])
        .line_comments(["//"])
        .block_comments([("/*", "*/")])
        .number_prefixes(ByteSet::from_bytes(b"bBoOxX"))
        .string_delimiters(ByteSet::from_bytes(b"\"'`"))
        .identifier_start(ident_start)
        .identifier_continue(ident_start.union(ByteSet::ascii_digits()))
        .brackets(BRACKETS)
        .build()
}

#[cfg(test)]
mod tests;
