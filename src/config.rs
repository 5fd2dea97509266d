//! Shared configuration helpers.

use figment::{providers::Serialized, Figment};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error")]
    Figment(#[from] figment::Error),
}

/// Merges the verbatim value of `var` into `key` when it is set and
/// non-empty. `Env` would reparse `2024` or `true` as typed values.
pub fn merge_raw_env(figment: Figment, var: &str, key: &str) -> Figment {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => figment.merge(Serialized::default(key, value)),
        _ => figment,
    }
}
