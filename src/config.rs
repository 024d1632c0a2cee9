use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation endpoint and credential
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Generation endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Text-generation inference endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API token; the REDRAFT_API_TOKEN environment variable takes
    /// precedence over this value
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_token: None,
        }
    }
}

impl AiConfig {
    /// Resolve the credential: environment value wins, then the config file.
    pub fn resolve_token(&self, env_token: Option<String>) -> Option<String> {
        env_token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.api_token.clone())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeVariant,
    /// Timestamp format for saved drafts
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

fn default_endpoint() -> String {
    // Zephyr-7B on the Hugging Face inference API
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("redraft");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when none exists.
    /// Every field has a default; a missing file is not an error.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path.parent().unwrap();

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ai.endpoint.contains("zephyr-7b-beta"));
        assert_eq!(config.ai.api_token, None);
        assert_eq!(config.ui.theme, ThemeVariant::Dark);
        assert_eq!(config.ui.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_parse_overrides() {
        let toml = r#"
            [ai]
            endpoint = "https://example.com/models/custom"
            api_token = "hf_secret"

            [ui]
            theme = "high-contrast"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.ai.endpoint, "https://example.com/models/custom");
        assert_eq!(config.ai.api_token.as_deref(), Some("hf_secret"));
        assert_eq!(config.ui.theme, ThemeVariant::HighContrast);
    }

    #[test]
    fn test_token_resolution_env_wins() {
        let ai = AiConfig {
            endpoint: default_endpoint(),
            api_token: Some("from-config".to_string()),
        };
        assert_eq!(
            ai.resolve_token(Some("from-env".to_string())).as_deref(),
            Some("from-env")
        );
        assert_eq!(ai.resolve_token(None).as_deref(), Some("from-config"));
    }

    #[test]
    fn test_token_resolution_blank_values_ignored() {
        let ai = AiConfig {
            endpoint: default_endpoint(),
            api_token: Some("  ".to_string()),
        };
        assert_eq!(ai.resolve_token(Some("".to_string())), None);

        let none = AiConfig::default();
        assert_eq!(none.resolve_token(None), None);
    }
}
