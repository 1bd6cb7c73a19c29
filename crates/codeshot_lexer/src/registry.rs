//! Language selector to rule table resolution.

use std::borrow::Cow;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::{LexError, RuleTableError};
use crate::languages::Language;
use crate::rules::RuleTable;

/// Maps language ids, aliases and file extensions to rule tables.
///
/// Built-in tables are borrowed `'static` data; tables added through
/// [`register`](Self::register) are owned by the registry. Lookups are
/// ASCII case-insensitive.
#[derive(Clone, Debug)]
pub struct Registry {
    tables: Vec<Cow<'static, RuleTable>>,
    ids: FxHashMap<Box<str>, usize>,
    extensions: FxHashMap<Box<str>, usize>,
}

impl Registry {
    /// Registry with no languages.
    pub fn empty() -> Self {
        Registry {
            tables: Vec::new(),
            ids: FxHashMap::default(),
            extensions: FxHashMap::default(),
        }
    }

    /// Registry with every [`Language`] and its aliases and extensions.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for lang in Language::ALL {
            let index = registry.tables.len();
            registry.tables.push(Cow::Borrowed(lang.rules()));
            for id in std::iter::once(lang.name()).chain(lang.aliases().iter().copied()) {
                registry.ids.insert(Box::from(id), index);
            }
            for ext in lang.extensions() {
                registry.extensions.insert(Box::from(*ext), index);
            }
        }
        registry
    }

    /// Add a language.
    ///
    /// The table is validated first. Its name and every alias must be
    /// unused; extensions already claimed by another language are taken
    /// over by the new table.
    pub fn register(
        &mut self,
        table: RuleTable,
        aliases: &[&str],
        extensions: &[&str],
    ) -> Result<(), RuleTableError> {
        table.validate()?;

        let ids: Vec<Box<str>> = std::iter::once(table.name())
            .chain(aliases.iter().copied())
            .map(|id| Box::from(id.to_ascii_lowercase()))
            .collect();
        if let Some(taken) = ids.iter().find(|id| self.ids.contains_key(*id)) {
            return Err(RuleTableError::DuplicateLanguage {
                id: taken.to_string(),
            });
        }

        let index = self.tables.len();
        tracing::debug!(language = table.name(), index, "registering rule table");
        self.tables.push(Cow::Owned(table));
        for id in ids {
            self.ids.insert(id, index);
        }
        for ext in extensions {
            let ext = ext.trim_start_matches('.').to_ascii_lowercase();
            if let Some(previous) = self.extensions.insert(Box::from(ext.as_str()), index) {
                tracing::debug!(
                    extension = %ext,
                    previous = self.tables[previous].name(),
                    "extension reassigned"
                );
            }
        }
        Ok(())
    }

    /// Resolve a language id or alias.
    pub fn resolve(&self, language: &str) -> Result<&RuleTable, LexError> {
        let key = language.to_ascii_lowercase();
        match self.ids.get(key.as_str()) {
            Some(&index) => {
                tracing::trace!(language, "resolved rule table");
                Ok(&*self.tables[index])
            }
            None => Err(LexError::UnsupportedLanguage {
                language: language.to_owned(),
            }),
        }
    }

    /// Resolve a language from a file's extension.
    pub fn detect(&self, path: &Path) -> Result<&RuleTable, LexError> {
        let unsupported = || LexError::UnsupportedLanguage {
            language: path.display().to_string(),
        };
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(unsupported)?
            .to_ascii_lowercase();
        let index = *self.extensions.get(ext.as_str()).ok_or_else(unsupported)?;
        tracing::trace!(
            path = %path.display(),
            language = self.tables[index].name(),
            "detected language"
        );
        Ok(&*self.tables[index])
    }

    /// Canonical names of every registered language, in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|table| table.name())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
