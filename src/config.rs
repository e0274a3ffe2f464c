use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::gemini::DEFAULT_MODEL;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

/// Optional on-disk overrides, read from the user config directory.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("career-compass").join("config.json"))
}

fn load_file_config() -> Result<FileConfig> {
    let Some(path) = config_file() else {
        return Ok(FileConfig::default());
    };
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolve(
    flag_key: Option<String>,
    env_key: Option<String>,
    file: FileConfig,
    flag_model: Option<String>,
) -> Result<Config> {
    let api_key = non_empty(flag_key)
        .or(non_empty(env_key))
        .or(non_empty(file.api_key))
        .ok_or_else(|| {
            anyhow!(
                "no Gemini API key configured: set GEMINI_API_KEY, pass --api-key, \
                 or add \"api_key\" to the config file"
            )
        })?;

    let model = non_empty(flag_model)
        .or(non_empty(file.model))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    Ok(Config { api_key, model })
}

impl Config {
    /// Resolves credential and model before any screen is shown. Flag
    /// beats environment beats config file; a missing key is a startup
    /// configuration error.
    pub fn load(args: &Args) -> Result<Self> {
        let file = load_file_config()?;
        resolve(
            args.api_key.clone(),
            std::env::var("GEMINI_API_KEY").ok(),
            file,
            args.model.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_beats_file() {
        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            model: None,
        };
        let config = resolve(
            Some("flag-key".to_string()),
            Some("env-key".to_string()),
            file,
            None,
        )
        .unwrap();
        assert_eq!(config.api_key, "flag-key");

        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            model: None,
        };
        let config = resolve(None, Some("env-key".to_string()), file, None).unwrap();
        assert_eq!(config.api_key, "env-key");

        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            model: None,
        };
        let config = resolve(None, None, file, None).unwrap();
        assert_eq!(config.api_key, "file-key");
    }

    #[test]
    fn missing_key_is_a_startup_error() {
        let err = resolve(None, None, FileConfig::default(), None).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(resolve(Some("   ".to_string()), None, FileConfig::default(), None).is_err());
    }

    #[test]
    fn model_falls_back_to_the_default() {
        let config = resolve(Some("k".to_string()), None, FileConfig::default(), None).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);

        let file = FileConfig {
            api_key: None,
            model: Some("gemini-other".to_string()),
        };
        let config = resolve(Some("k".to_string()), None, file, None).unwrap();
        assert_eq!(config.model, "gemini-other");

        let config = resolve(
            Some("k".to_string()),
            None,
            FileConfig::default(),
            Some("gemini-flag".to_string()),
        )
        .unwrap();
        assert_eq!(config.model, "gemini-flag");
    }
}
