//! The `lex` command: dump the token stream of one or more files.

use codeshot_lexer::{lex, Palette, Registry, SourceBuffer};
use rayon::prelude::*;

use super::{read_file, select_rules, CliError, LexOptions};
use crate::render::dump_tokens;

/// Lex every file in parallel and print the dumps in argument order.
///
/// Stops at the first failing file (in argument order); dumps of the files
/// before it are still printed.
pub fn lex_files(options: &LexOptions) -> Result<(), CliError> {
    let registry = Registry::builtin();
    let palette = Palette::default();
    tracing::debug!(files = options.files.len(), "lexing files");

    let dumps: Vec<Result<String, CliError>> = options
        .files
        .par_iter()
        .map(|path| lex_one(&registry, &palette, path, options.lang.as_deref()))
        .collect();

    for dump in dumps {
        print!("{}", dump?);
    }
    Ok(())
}

pub(super) fn lex_one(
    registry: &Registry,
    palette: &Palette,
    path: &str,
    lang: Option<&str>,
) -> Result<String, CliError> {
    let rules = select_rules(registry, path, lang)?;
    let source = SourceBuffer::new(&read_file(path)?);
    let tokens = lex(&source, rules, palette);
    Ok(dump_tokens(path, &tokens))
}
