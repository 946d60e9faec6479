use crate::i18n::DEFAULT_LANGUAGE_CODE;
use anyhow::{bail, Context, Result};
use std::env::VarError;

/// Environment variable holding the fallback language code.
pub const DEFAULT_LANGUAGE_VAR: &str = "PROMPT_LANGUAGE_DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Code used when a session has no usable language preference
    pub default_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var(DEFAULT_LANGUAGE_VAR) {
            Ok(value) => {
                let code = value.trim().to_uppercase();
                if code.is_empty() {
                    bail!("{} is set but empty", DEFAULT_LANGUAGE_VAR);
                }
                code
            }
            Err(VarError::NotPresent) => DEFAULT_LANGUAGE_CODE.to_string(),
            Err(err) => {
                return Err(err).with_context(|| format!("{} is not valid", DEFAULT_LANGUAGE_VAR))
            }
        };

        Ok(Self { default_language })
    }

    /// The `default` argument to pass to the resolver.
    pub fn resolver_default(&self) -> &str {
        &self.default_language
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }
}
