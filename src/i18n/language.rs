//! Language type: validated handle over a registry entry.

use crate::i18n::state::LanguageSource;
use crate::i18n::{resolve_language, LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A language that exists in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Uppercase registry code (e.g., "EN", "FR")
    code: &'static str,
}

impl Language {
    /// English, the canonical fallback language.
    pub const ENGLISH: Language = Language { code: "EN" };

    /// Create a Language from a code, ignoring case.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err` if the code is empty or unknown
    ///
    /// # Example
    /// ```
    /// use prompt_language::i18n::Language;
    ///
    /// let french = Language::from_code("fr").unwrap();
    /// assert_eq!(french.code(), "FR");
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        if code.is_empty() {
            bail!("Language code is empty");
        }

        match LanguageRegistry::get().get_by_code(&code.to_uppercase()) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Pick the language a session asks for.
    ///
    /// Uses the same resolution as [`resolve_language`] and falls back to the
    /// canonical language when the resolved code has no registry entry, so
    /// `instruction()` always agrees with
    /// [`language_instruction`](crate::i18n::language_instruction).
    pub fn from_state<S>(state: &S, default: &str) -> Language
    where
        S: LanguageSource + ?Sized,
    {
        let code = resolve_language(state, default);
        LanguageRegistry::get()
            .get_by_code(&code)
            .map(|config| Language { code: config.code })
            .unwrap_or_else(Language::canonical)
    }

    /// Get the canonical (fallback) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the registry code (e.g., "EN", "FR").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Language built through `from_code`, `from_state` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the sentence telling the model to respond in this language.
    pub fn instruction(&self) -> &'static str {
        self.config().instruction
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
