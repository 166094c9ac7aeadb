//! Configuration file loading for `copyforge.toml`.
//!
//! Search order: an explicit `--config` path, then `./copyforge.toml`, then
//! `~/.copyforge/copyforge.toml`. A missing file (when not explicitly
//! requested) means built-in defaults.

use crate::catalog::{Framework, OutputLanguage, Pillar, Tone};
use crate::config::constants::defaults;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyforgeConfig {
    pub agent: AgentConfig,
    pub defaults: RequestDefaults,
}

/// Endpoint settings: which model to call and where the key comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub model: String,
    pub api_key_env: String,
    /// Key stored directly in the file. Environment variables win over this.
    pub api_key: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

/// Initial form values for a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub tone: Tone,
    pub language: OutputLanguage,
    pub pillar: Pillar,
    pub framework: Framework,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            tone: Tone::Friendly,
            language: OutputLanguage::English,
            pillar: Pillar::Promotional,
            framework: Framework::Aida,
        }
    }
}

impl CopyforgeConfig {
    /// Load configuration, honoring an explicit path when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                return Self::load_from_path(&candidate);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(defaults::CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(defaults::CONFIG_HOME_DIR)
                    .join(defaults::CONFIG_FILE_NAME),
            );
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_when_no_file() {
        let config = CopyforgeConfig::default();
        assert_eq!(config.agent.model, defaults::DEFAULT_MODEL);
        assert_eq!(config.agent.api_key_env, defaults::DEFAULT_API_KEY_ENV);
        assert_eq!(config.defaults.tone, Tone::Friendly);
        assert_eq!(config.defaults.language, OutputLanguage::English);
    }

    #[test]
    fn loads_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[agent]
model = "gemini-2.5-pro"

[defaults]
tone = "witty"
framework = "pas"
"#
        )
        .unwrap();

        let config = CopyforgeConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.agent.model, "gemini-2.5-pro");
        // Unset fields keep their defaults.
        assert_eq!(config.agent.api_key_env, defaults::DEFAULT_API_KEY_ENV);
        assert_eq!(config.defaults.tone, Tone::Witty);
        assert_eq!(config.defaults.framework, Framework::Pas);
        assert_eq!(config.defaults.pillar, Pillar::Promotional);
    }

    #[test]
    fn explicit_missing_path_errors() {
        let result = CopyforgeConfig::load(Some(Path::new("/nonexistent/copyforge.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[agent\nmodel = ").unwrap();
        assert!(CopyforgeConfig::load_from_path(file.path()).is_err());
    }
}
