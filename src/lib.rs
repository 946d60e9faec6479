//! Steer a model's response language from session state.
//!
//! See [`i18n::resolve_language`] and [`i18n::language_instruction`].

pub mod config;
pub mod i18n;
