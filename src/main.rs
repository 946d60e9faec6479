//! Preview binary - shows which language instruction a session state produces
//!
//! Usage:
//!   prompt-language state.json           # Read state from a file
//!   prompt-language - < state.json       # Read state from stdin
//!   prompt-language --json state.json    # Print the result as JSON
//!
//! Optional environment variables:
//! - PROMPT_LANGUAGE_DEFAULT (defaults to EN)
//! - RUST_LOG

use anyhow::{Context, Result};
use prompt_language::config::Config;
use prompt_language::i18n::{language_instruction, resolve_language, Language, LanguageConfig};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use tracing::info;

#[derive(Debug, Serialize)]
struct Preview {
    code: String,
    instruction: &'static str,
    language: &'static LanguageConfig,
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prompt_language=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|arg| arg == "--json");
    let source = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("-");

    let state = read_state(source)?;
    let default = config.resolver_default();

    let preview = Preview {
        code: resolve_language(&state, default),
        instruction: language_instruction(&state, default),
        language: Language::from_state(&state, default).config(),
    };
    info!("Resolved language code '{}' ({})", preview.code, preview.language.name);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        println!("{}\n{}", preview.code, preview.instruction);
    }

    Ok(())
}

/// Read a JSON state document; empty input counts as no state.
fn read_state(source: &str) -> Result<Value> {
    let raw = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read state from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read state file {}", source))?
    };

    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&raw).with_context(|| format!("State in {} is not valid JSON", source))
}
