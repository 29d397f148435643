//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.ideavet.toml` files. CLI arguments take precedence over the file;
//! the API key is never read from here (env var or interactive prompt
//! only).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Model settings.
    #[serde(default)]
    pub model: ModelConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Input CSV file with the ideas to evaluate.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Output file path for the JSON report.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("ideas.csv")
}

fn default_output() -> PathBuf {
    PathBuf::from("evaluated_ideas.json")
}

/// Gemini model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name.
    #[serde(default = "default_model")]
    pub name: String,

    /// Gemini API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Temperature for generation. Unset means the model default.
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Maximum tokens in the model's reply.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
            api_url: default_api_url(),
            temperature: None,
            max_output_tokens: None,
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".ideavet.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref input) = args.input {
            self.general.input = input.clone();
        }
        if let Some(ref output) = args.output {
            self.general.output = output.clone();
        }

        if let Some(ref model) = args.model {
            self.model.name = model.clone();
        }
        if let Some(ref api_url) = args.api_url {
            self.model.api_url = api_url.clone();
        }
        if let Some(temperature) = args.temperature {
            self.model.temperature = Some(temperature);
        }
        if let Some(max_output_tokens) = args.max_output_tokens {
            self.model.max_output_tokens = Some(max_output_tokens);
        }
        if let Some(timeout) = args.timeout {
            self.model.timeout_seconds = timeout;
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> crate::cli::Args {
        crate::cli::Args {
            input: None,
            output: None,
            model: None,
            api_url: None,
            api_key: None,
            temperature: None,
            max_output_tokens: None,
            timeout: None,
            config: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.input, PathBuf::from("ideas.csv"));
        assert_eq!(config.general.output, PathBuf::from("evaluated_ideas.json"));
        assert_eq!(config.model.name, "gemini-1.5-flash");
        assert_eq!(config.model.timeout_seconds, 120);
        assert!(config.model.temperature.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
input = "backlog.csv"
verbose = true

[model]
name = "gemini-1.5-pro"
temperature = 0.2
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.input, PathBuf::from("backlog.csv"));
        assert!(config.general.verbose);
        assert_eq!(config.general.output, PathBuf::from("evaluated_ideas.json"));
        assert_eq!(config.model.name, "gemini-1.5-pro");
        assert_eq!(config.model.temperature, Some(0.2));
        assert_eq!(config.model.timeout_seconds, 120);
    }

    #[test]
    fn test_merge_with_args_overrides_explicit_values_only() {
        let mut config = Config::default();
        config.model.name = "gemini-1.5-pro".to_string();

        let mut args = make_args();
        args.output = Some(PathBuf::from("custom.json"));
        args.timeout = Some(30);

        config.merge_with_args(&args);

        assert_eq!(config.general.output, PathBuf::from("custom.json"));
        assert_eq!(config.model.timeout_seconds, 30);
        // Untouched by args: keeps the config file value.
        assert_eq!(config.model.name, "gemini-1.5-pro");
        assert_eq!(config.general.input, PathBuf::from("ideas.csv"));
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[model]"));
        assert!(toml_str.contains("gemini-1.5-flash"));
    }
}
