//! Internationalization (i18n) module for response-language steering.
//!
//! Everything needed to turn a session's language preference into the
//! instruction sentence that is added to a model prompt.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their instructions
//! - `state`: Read-only access to `metadata.language` in session state
//! - `resolver`: Code resolution and instruction lookup with default fallback
//! - `language`: Type-safe Language handle over a registry entry
//!
//! # Example
//!
//! ```rust
//! use prompt_language::i18n::{language_instruction, resolve_language, DEFAULT_LANGUAGE_CODE};
//! use serde_json::json;
//!
//! let state = json!({"metadata": {"language": "de"}});
//! assert_eq!(resolve_language(&state, DEFAULT_LANGUAGE_CODE), "DE");
//! assert_eq!(
//!     language_instruction(&state, DEFAULT_LANGUAGE_CODE),
//!     "Bitte auf Deutsch antworten."
//! );
//! ```

mod language;
mod registry;
mod resolver;
mod state;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry, ENGLISH_INSTRUCTION};
pub use resolver::{
    language_instruction, resolve_language, try_resolve_language, DEFAULT_LANGUAGE_CODE,
};
pub use state::{LanguageLookupError, LanguageSource, LANGUAGE_KEY, METADATA_KEY};
