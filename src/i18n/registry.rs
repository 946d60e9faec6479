//! Language registry: Single source of truth for all supported response languages.
//!
//! Every language a session can ask for lives here together with the sentence that
//! tells the model to answer in it. The registry is built once behind a `OnceLock`
//! and never mutated afterwards.

use serde::Serialize;
use std::sync::OnceLock;

/// Instruction used for English and for every code the registry does not know.
pub const ENGLISH_INSTRUCTION: &str = "Respond in English.";

/// Configuration for a supported response language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// Uppercase language code as stored in session metadata (e.g., "EN", "CN")
    pub code: &'static str,

    /// English name of the language (e.g., "Chinese", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "中文", "Français")
    pub native_name: &'static str,

    /// Sentence appended to prompts so the model answers in this language
    pub instruction: &'static str,

    /// Whether this is the fallback language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; callers resolve and uppercase them first.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages, canonical first.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if the registry defines zero or several canonical languages
    /// (this indicates a configuration error in `default_languages`).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code has an entry in the registry.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Get the response instruction for a code.
    ///
    /// Unknown codes get the English instruction, so the result is always one of the
    /// registry's fixed sentences.
    pub fn instruction_for(&self, code: &str) -> &'static str {
        self.get_by_code(code)
            .map(|lang| lang.instruction)
            .unwrap_or(ENGLISH_INSTRUCTION)
    }
}

/// Default language configurations.
///
/// Mirrors the locales offered in the application's language settings.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "EN",
            name: "English",
            native_name: "English",
            // Sent explicitly so an earlier instruction in the conversation can't stick.
            instruction: ENGLISH_INSTRUCTION,
            is_canonical: true,
        },
        LanguageConfig {
            code: "CN",
            name: "Chinese",
            native_name: "中文",
            instruction: "请使用中文回答。",
            is_canonical: false,
        },
        LanguageConfig {
            code: "JA",
            name: "Japanese",
            native_name: "日本語",
            instruction: "日本語で回答してください。",
            is_canonical: false,
        },
        LanguageConfig {
            code: "KO",
            name: "Korean",
            native_name: "한국어",
            instruction: "한국어로 답변해 주세요.",
            is_canonical: false,
        },
        LanguageConfig {
            code: "AR",
            name: "Arabic",
            native_name: "العربية",
            instruction: "يرجى الإجابة باللغة العربية.",
            is_canonical: false,
        },
        LanguageConfig {
            code: "FR",
            name: "French",
            native_name: "Français",
            instruction: "Veuillez répondre en français.",
            is_canonical: false,
        },
        LanguageConfig {
            code: "DE",
            name: "German",
            native_name: "Deutsch",
            instruction: "Bitte auf Deutsch antworten.",
            is_canonical: false,
        },
    ]
}
