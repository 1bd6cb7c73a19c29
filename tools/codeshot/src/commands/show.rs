//! The `show` command: print a file with syntax colors.

use codeshot_lexer::{lex, Palette, Registry, SourceBuffer};

use super::{read_file, select_rules, CliError, ShowOptions};
use crate::render::render_ansi;

/// Render one file to stdout.
pub fn show_file(options: &ShowOptions) -> Result<(), CliError> {
    print!("{}", render_file(&Registry::builtin(), options)?);
    Ok(())
}

pub(super) fn render_file(registry: &Registry, options: &ShowOptions) -> Result<String, CliError> {
    let rules = select_rules(registry, &options.file, options.lang.as_deref())?;
    let palette = palette_for(options);
    let source = SourceBuffer::new(&read_file(&options.file)?);
    let tokens = lex(&source, rules, &palette);
    Ok(render_ansi(&tokens, options.gutter))
}

/// Default palette with the `--color` overrides applied in order.
pub(super) fn palette_for(options: &ShowOptions) -> Palette {
    let mut palette = Palette::default();
    for &(kind, color) in &options.colors {
        palette.set(kind, color);
    }
    palette
}
