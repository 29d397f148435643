//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Ideavet - LLM-powered project idea evaluator
///
/// Reads project ideas from a CSV file, asks Gemini to evaluate each one
/// (viability, time estimate, monetization), and writes the results to a
/// JSON report. Rows the model cannot evaluate are kept with sentinel
/// values instead of aborting the batch.
///
/// Examples:
///   ideavet
///   ideavet --input ideas.csv --output evaluated_ideas.json
///   ideavet --model gemini-1.5-pro --temperature 0.2
///   ideavet --dry-run
///   ideavet --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Input CSV file with `Idea` and `Description` columns
    ///
    /// Defaults to ideas.csv (or the value from .ideavet.toml).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file path for the JSON report
    ///
    /// Defaults to evaluated_ideas.json (or the value from .ideavet.toml).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Gemini model to use for evaluation
    ///
    /// Defaults to gemini-1.5-flash. Can also be set via the IDEAVET_MODEL
    /// env var or .ideavet.toml config.
    #[arg(short, long, env = "IDEAVET_MODEL")]
    pub model: Option<String>,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Google AI API key
    ///
    /// Usually set via the GOOGLE_API_KEY env var. When neither the flag
    /// nor the env var is set, the key is asked for interactively.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    ///
    /// Left unset, the model's own default applies.
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Maximum tokens in the model's reply
    #[arg(long, value_name = "TOKENS")]
    pub max_output_tokens: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .ideavet.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run: read and list the ideas without calling the model
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .ideavet.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Validate API URL format
        if let Some(ref api_url) = self.api_url {
            if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
                return Err("API URL must start with 'http://' or 'https://'".to_string());
            }
        }

        // Validate temperature range
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err("Temperature must be between 0.0 and 2.0".to_string());
            }
        }

        // Validate max output tokens if provided
        if let Some(max_output_tokens) = self.max_output_tokens {
            if max_output_tokens == 0 {
                return Err("Max output tokens must be at least 1".to_string());
            }
        }

        // Validate timeout if provided
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
