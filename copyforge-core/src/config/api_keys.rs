//! API key retrieval from environment variables, .env files, and the
//! configuration file.
//!
//! Environment variables take priority over config-file values. The Gemini
//! endpoint also honors `GOOGLE_API_KEY` as a fallback variable name.

use crate::config::constants::defaults;
use anyhow::Result;
use std::env;

/// Where to look for the Gemini API key.
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// Primary environment variable name.
    pub env_var: String,
    /// Key supplied through the configuration file, if any.
    pub config_value: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            env_var: defaults::DEFAULT_API_KEY_ENV.to_string(),
            config_value: None,
        }
    }
}

/// Load environment variables from a .env file in the current directory.
///
/// A missing file is fine; any other load failure is reported as a warning
/// and otherwise ignored.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment variables from .env");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load .env file");
            Ok(())
        }
    }
}

/// Resolve the API key: primary env var, then `GOOGLE_API_KEY`, then the
/// configuration file value. Errors when none is set, naming the variables
/// to configure.
pub fn get_api_key(sources: &ApiKeySources) -> Result<String> {
    if let Ok(key) = env::var(&sources.env_var) {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    if let Ok(key) = env::var(defaults::FALLBACK_API_KEY_ENV) {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    if let Some(key) = &sources.config_value {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }

    Err(anyhow::anyhow!(
        "No Gemini API key found. Set {} or {} (or add to .env file), or configure api_key in {}",
        sources.env_var,
        defaults::FALLBACK_API_KEY_ENV,
        defaults::CONFIG_FILE_NAME
    ))
}
