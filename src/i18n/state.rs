//! Read-only access to the language preference stored in session state.
//!
//! Session state is owned by whatever orchestrates the conversation. The only thing
//! read from it is `metadata.language`, and every shape mismatch on the way there is
//! reported as a [`LanguageLookupError`] instead of a panic.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::BuildHasher;
use thiserror::Error;

/// Key of the metadata mapping inside the session state.
pub const METADATA_KEY: &str = "metadata";

/// Key of the language preference inside the metadata mapping.
pub const LANGUAGE_KEY: &str = "language";

/// Why a language preference could not be read from session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageLookupError {
    /// No state at all, or a falsy one (`null`, `false`, `0`, `""`, `[]`, `{}`)
    #[error("session state is empty")]
    EmptyState,

    /// The state or its metadata entry is not a key/value mapping
    #[error("{path} is {found}, not a mapping")]
    NotAMapping {
        path: &'static str,
        found: &'static str,
    },

    /// No `language` entry (or no `metadata` entry at all)
    #[error("no language preference in metadata")]
    MissingLanguage,

    /// The `language` entry holds something other than a string
    #[error("metadata.language is {found}, not a string")]
    NotAString { found: &'static str },

    /// The `language` entry is a string that is empty once uppercased
    #[error("metadata.language is empty")]
    EmptyCode,
}

/// Anything a language preference can be read from.
///
/// Implementations only need to walk `metadata.language`; the caller uppercases and
/// validates the result.
pub trait LanguageSource {
    /// Returns the raw string stored at `metadata.language`.
    fn metadata_language(&self) -> Result<&str, LanguageLookupError>;
}

impl LanguageSource for Value {
    fn metadata_language(&self) -> Result<&str, LanguageLookupError> {
        if is_falsy(self) {
            return Err(LanguageLookupError::EmptyState);
        }
        match self {
            Value::Object(map) => map.metadata_language(),
            other => Err(LanguageLookupError::NotAMapping {
                path: "state",
                found: kind_of(other),
            }),
        }
    }
}

impl LanguageSource for Map<String, Value> {
    fn metadata_language(&self) -> Result<&str, LanguageLookupError> {
        if self.is_empty() {
            return Err(LanguageLookupError::EmptyState);
        }
        language_in(self.get(METADATA_KEY))
    }
}

impl<S: BuildHasher> LanguageSource for HashMap<String, Value, S> {
    fn metadata_language(&self) -> Result<&str, LanguageLookupError> {
        if self.is_empty() {
            return Err(LanguageLookupError::EmptyState);
        }
        language_in(self.get(METADATA_KEY))
    }
}

impl<T: LanguageSource> LanguageSource for Option<T> {
    fn metadata_language(&self) -> Result<&str, LanguageLookupError> {
        match self {
            Some(state) => state.metadata_language(),
            None => Err(LanguageLookupError::EmptyState),
        }
    }
}

impl<T: LanguageSource + ?Sized> LanguageSource for &T {
    fn metadata_language(&self) -> Result<&str, LanguageLookupError> {
        (**self).metadata_language()
    }
}

/// Walk from the (possibly absent) metadata entry down to the language string.
fn language_in(metadata: Option<&Value>) -> Result<&str, LanguageLookupError> {
    let metadata = match metadata {
        // Missing metadata reads like an empty mapping
        None => return Err(LanguageLookupError::MissingLanguage),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(LanguageLookupError::NotAMapping {
                path: METADATA_KEY,
                found: kind_of(other),
            })
        }
    };

    match metadata.get(LANGUAGE_KEY) {
        None => Err(LanguageLookupError::MissingLanguage),
        Some(Value::String(language)) => Ok(language),
        Some(other) => Err(LanguageLookupError::NotAString {
            found: kind_of(other),
        }),
    }
}

/// JSON truthiness: null, false, zero and empty containers count as "no state".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Well-formed State ====================

    #[test]
    fn test_reads_language_from_metadata() {
        let state = json!({"metadata": {"language": "fr"}});
        assert_eq!(state.metadata_language(), Ok("fr"));
    }

    #[test]
    fn test_ignores_unrelated_keys() {
        let state = json!({
            "messages": [],
            "metadata": {"language": "ja", "show_reasoning": true},
        });
        assert_eq!(state.metadata_language(), Ok("ja"));
    }

    #[test]
    fn test_returns_raw_string_without_uppercasing() {
        let state = json!({"metadata": {"language": " fr "}});
        assert_eq!(state.metadata_language(), Ok(" fr "));
    }

    // ==================== Empty State ====================

    #[test]
    fn test_falsy_values_are_empty_state() {
        for state in [
            Value::Null,
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert_eq!(
                state.metadata_language(),
                Err(LanguageLookupError::EmptyState),
                "state: {state}"
            );
        }
    }

    #[test]
    fn test_none_is_empty_state() {
        let state: Option<Value> = None;
        assert_eq!(
            state.metadata_language(),
            Err(LanguageLookupError::EmptyState)
        );
    }

    #[test]
    fn test_some_delegates_to_inner_state() {
        let state = Some(json!({"metadata": {"language": "de"}}));
        assert_eq!(state.metadata_language(), Ok("de"));
    }

    // ==================== Malformed State ====================

    #[test]
    fn test_non_mapping_state() {
        for (state, found) in [
            (json!(true), "a boolean"),
            (json!(3), "a number"),
            (json!("metadata"), "a string"),
            (json!([{"metadata": {"language": "fr"}}]), "an array"),
        ] {
            assert_eq!(
                state.metadata_language(),
                Err(LanguageLookupError::NotAMapping {
                    path: "state",
                    found
                })
            );
        }
    }

    #[test]
    fn test_non_mapping_metadata() {
        let state = json!({"metadata": ["language", "fr"]});
        assert_eq!(
            state.metadata_language(),
            Err(LanguageLookupError::NotAMapping {
                path: "metadata",
                found: "an array"
            })
        );
    }

    #[test]
    fn test_null_metadata_is_not_a_mapping() {
        let state = json!({"metadata": null});
        assert!(matches!(
            state.metadata_language(),
            Err(LanguageLookupError::NotAMapping { found: "null", .. })
        ));
    }

    #[test]
    fn test_missing_metadata() {
        let state = json!({"messages": ["hello"]});
        assert_eq!(
            state.metadata_language(),
            Err(LanguageLookupError::MissingLanguage)
        );
    }

    #[test]
    fn test_missing_language() {
        let state = json!({"metadata": {}});
        assert_eq!(
            state.metadata_language(),
            Err(LanguageLookupError::MissingLanguage)
        );
    }

    #[test]
    fn test_non_string_language() {
        for (language, found) in [
            (json!(7), "a number"),
            (json!(["fr"]), "an array"),
            (json!(null), "null"),
            (json!({"code": "fr"}), "an object"),
        ] {
            let state = json!({"metadata": {"language": language}});
            assert_eq!(
                state.metadata_language(),
                Err(LanguageLookupError::NotAString { found })
            );
        }
    }

    // ==================== Other Containers ====================

    #[test]
    fn test_hash_map_state() {
        let mut state = HashMap::new();
        state.insert(METADATA_KEY.to_string(), json!({"language": "ko"}));
        assert_eq!(state.metadata_language(), Ok("ko"));

        let empty: HashMap<String, Value> = HashMap::new();
        assert_eq!(
            empty.metadata_language(),
            Err(LanguageLookupError::EmptyState)
        );
    }

    #[test]
    fn test_json_map_state() {
        let mut state = Map::new();
        state.insert(METADATA_KEY.to_string(), json!({"language": "ar"}));
        assert_eq!(state.metadata_language(), Ok("ar"));
    }

    #[test]
    fn test_reference_delegates() {
        let state = json!({"metadata": {"language": "cn"}});
        let borrowed: &Value = &state;
        assert_eq!((&borrowed).metadata_language(), Ok("cn"));
    }

    // ==================== Error Display ====================

    #[test]
    fn test_error_messages() {
        let err = LanguageLookupError::NotAMapping {
            path: "metadata",
            found: "an array",
        };
        assert_eq!(err.to_string(), "metadata is an array, not a mapping");
        assert_eq!(
            LanguageLookupError::NotAString { found: "a number" }.to_string(),
            "metadata.language is a number, not a string"
        );
    }
}
