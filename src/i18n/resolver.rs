//! Language code resolution and response-language instructions.
//!
//! Both entry points are pure and never fail: any problem reading the session
//! state degrades to the caller's default code, and any code without an entry in
//! the registry degrades to the English instruction.

use crate::i18n::state::{LanguageLookupError, LanguageSource};
use crate::i18n::LanguageRegistry;
use tracing::debug;

/// Default language code used when a session carries no usable preference.
pub const DEFAULT_LANGUAGE_CODE: &str = "EN";

/// Read and normalize the session's language code.
///
/// # Returns
/// * `Ok(code)` with the uppercased `metadata.language` string
/// * `Err` describing why no code could be read
pub fn try_resolve_language<S>(state: &S) -> Result<String, LanguageLookupError>
where
    S: LanguageSource + ?Sized,
{
    let code = state.metadata_language()?.to_uppercase();
    if code.is_empty() {
        return Err(LanguageLookupError::EmptyCode);
    }
    Ok(code)
}

/// Resolve the session's language code, falling back to `default`.
///
/// The value found at `metadata.language` is uppercased but not trimmed or checked
/// against the registry. A missing `metadata` or `language` entry reads as `default`
/// and is uppercased like a stored value; every other failure returns `default` as
/// given.
///
/// # Example
/// ```
/// use prompt_language::i18n::{resolve_language, DEFAULT_LANGUAGE_CODE};
/// use serde_json::json;
///
/// let state = json!({"metadata": {"language": "fr"}});
/// assert_eq!(resolve_language(&state, DEFAULT_LANGUAGE_CODE), "FR");
/// assert_eq!(resolve_language(&json!(null), DEFAULT_LANGUAGE_CODE), "EN");
/// ```
pub fn resolve_language<S>(state: &S, default: &str) -> String
where
    S: LanguageSource + ?Sized,
{
    match try_resolve_language(state) {
        Ok(code) => code,
        Err(LanguageLookupError::MissingLanguage) => {
            debug!("No language preference set, using '{}'", default);
            // Empty only when `default` itself is empty
            default.to_uppercase()
        }
        Err(err) => {
            debug!("No usable language preference ({}), using '{}'", err, default);
            default.to_string()
        }
    }
}

/// Get the instruction telling the model which language to respond in.
///
/// # Example
/// ```
/// use prompt_language::i18n::{language_instruction, DEFAULT_LANGUAGE_CODE};
/// use serde_json::json;
///
/// let state = json!({"metadata": {"language": "fr"}});
/// assert_eq!(
///     language_instruction(&state, DEFAULT_LANGUAGE_CODE),
///     "Veuillez répondre en français."
/// );
/// ```
pub fn language_instruction<S>(state: &S, default: &str) -> &'static str
where
    S: LanguageSource + ?Sized,
{
    let code = resolve_language(state, default);
    LanguageRegistry::get().instruction_for(&code)
}
