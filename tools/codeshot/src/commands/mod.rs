//! Command handlers for the codeshot CLI.
//!
//! Each submodule implements one command. Argument parsing, file reading
//! and language selection shared between commands live here.

use std::path::Path;

use codeshot_lexer::{
    Color, ColorParseError, KindParseError, LexError, Registry, RuleTable, TokenKind,
};

mod languages;
mod lex;
mod show;

pub use languages::list_languages;
pub use lex::lex_files;
pub use show::show_file;

/// Failure of a CLI command. Printed as `error: ...` by the binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing file path")]
    MissingFile,
    #[error("option `{flag}` needs a value")]
    MissingValue { flag: String },
    #[error("unknown option `{arg}`")]
    UnknownOption { arg: String },
    #[error("`show` takes one file, got `{extra}` as well")]
    ExtraFile { extra: String },
    #[error("expected `<kind>=<color>`, got `{arg}`")]
    MalformedOverride { arg: String },
    #[error(transparent)]
    Color(#[from] ColorParseError),
    #[error(transparent)]
    Kind(#[from] KindParseError),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Options of the `lex` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Language id or alias; detected from each file's extension when unset.
    pub lang: Option<String>,
    pub files: Vec<String>,
}

impl LexOptions {
    /// Parse the arguments following `lex`.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = LexOptions::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            if let Some(lang) = take_value(arg, "--lang", &mut args)? {
                options.lang = Some(lang);
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption { arg: arg.clone() });
            } else {
                options.files.push(arg.clone());
            }
        }
        if options.files.is_empty() {
            return Err(CliError::MissingFile);
        }
        Ok(options)
    }
}

/// Options of the `show` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowOptions {
    pub file: String,
    pub lang: Option<String>,
    /// Palette overrides, applied in order over the default palette.
    pub colors: Vec<(TokenKind, Color)>,
    pub gutter: bool,
}

impl ShowOptions {
    /// Parse the arguments following `show`.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut file = None;
        let mut lang = None;
        let mut colors = Vec::new();
        let mut gutter = true;

        let mut args = args.iter();
        while let Some(arg) = args.next() {
            if let Some(value) = take_value(arg, "--lang", &mut args)? {
                lang = Some(value);
            } else if let Some(value) = take_value(arg, "--color", &mut args)? {
                colors.push(parse_color_override(&value)?);
            } else if arg == "--no-gutter" {
                gutter = false;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption { arg: arg.clone() });
            } else if file.is_some() {
                return Err(CliError::ExtraFile { extra: arg.clone() });
            } else {
                file = Some(arg.clone());
            }
        }

        Ok(ShowOptions {
            file: file.ok_or(CliError::MissingFile)?,
            lang,
            colors,
            gutter,
        })
    }
}

/// Value of `flag` given as `flag=value` or `flag value`; `None` if `arg`
/// is not `flag`.
fn take_value<'a>(
    arg: &str,
    flag: &str,
    rest: &mut impl Iterator<Item = &'a String>,
) -> Result<Option<String>, CliError> {
    if arg == flag {
        return match rest.next() {
            Some(value) => Ok(Some(value.clone())),
            None => Err(CliError::MissingValue {
                flag: flag.to_owned(),
            }),
        };
    }
    Ok(arg
        .strip_prefix(flag)
        .and_then(|tail| tail.strip_prefix('='))
        .map(str::to_owned))
}

/// Parse a `<kind>=<color>` palette override, e.g. `keyword=#ff8800`.
pub fn parse_color_override(arg: &str) -> Result<(TokenKind, Color), CliError> {
    let Some((kind, color)) = arg.split_once('=') else {
        return Err(CliError::MalformedOverride {
            arg: arg.to_owned(),
        });
    };
    Ok((TokenKind::from_name(kind.trim())?, Color::from_hex(color.trim())?))
}

/// Rule table for `path`: the explicit `--lang` if given, otherwise the
/// one registered for the file's extension.
pub(crate) fn select_rules<'r>(
    registry: &'r Registry,
    path: &str,
    lang: Option<&str>,
) -> Result<&'r RuleTable, CliError> {
    let rules = match lang {
        Some(lang) => registry.resolve(lang)?,
        None => registry.detect(Path::new(path))?,
    };
    Ok(rules)
}

/// Read a source file.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
