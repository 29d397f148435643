//! Ideavet - LLM-powered project idea evaluator
//!
//! A CLI tool that reads project ideas from a CSV file, asks Gemini to
//! evaluate each one with a few-shot prompt, and writes the evaluations
//! to a JSON report. Rows the model cannot evaluate are kept with
//! sentinel values instead of aborting the batch.
//!
//! Exit codes:
//!   0 - Success (the batch ran to completion, sentinel rows included)
//!   1 - Runtime error (input, config, client, or write failure)

mod cli;
mod config;
mod dataset;
mod evaluator;
mod llm;
mod models;
mod parser;
mod prompt;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use evaluator::Evaluator;
use llm::{GeminiClient, GeminiConfig, GenerativeModel};
use models::IdeaRecord;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Ideavet v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the evaluation
    if let Err(e) = run(args).await {
        error!("Evaluation failed: {}", e);
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .ideavet.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".ideavet.toml");

    if path.exists() {
        eprintln!("⚠️  .ideavet.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .ideavet.toml")?;

    println!("✅ Created .ideavet.toml with default settings.");
    println!("   Edit it to customize input, output, model, and more.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete evaluation workflow.
async fn run(args: Args) -> Result<()> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Load the ideas
    println!("📥 Loading ideas from: {}", config.general.input.display());
    let ideas = dataset::load_ideas(&config.general.input)?;
    info!("Loaded {} ideas", ideas.len());

    // Handle --dry-run: list the ideas and exit
    if args.dry_run {
        return handle_dry_run(&ideas);
    }

    if ideas.is_empty() {
        warn!("Input file has no idea rows; the report will be an empty array");
    }

    // Step 2: Initialize the Gemini client
    println!("🤖 Initializing Gemini client...");
    println!("   Model: {}", config.model.name);
    println!("   API: {}", config.model.api_url);
    println!("   Timeout: {}s", config.model.timeout_seconds);

    let api_key = resolve_api_key(&args)?;

    let client = GeminiClient::new(GeminiConfig {
        api_url: config.model.api_url.clone(),
        model: config.model.name.clone(),
        api_key,
        temperature: config.model.temperature,
        max_output_tokens: config.model.max_output_tokens,
        timeout_seconds: config.model.timeout_seconds,
    })?;
    debug!("Gemini client ready (model: {})", client.name());

    // Step 3: Evaluate the batch, one idea at a time
    println!("\n🔬 Evaluating {} ideas...\n", ideas.len());

    let evaluator = Evaluator::new(client).show_progress(!args.quiet);
    let result = evaluator.run(&ideas).await;

    // Step 4: Write the report
    println!("\n📝 Writing report...");
    report::write_json_report(&result.records, &config.general.output)?;

    // Print summary
    let duration = start_time.elapsed().as_secs_f64();
    let summary = &result.summary;

    println!("\n📊 Evaluation Summary:");
    println!("   Ideas processed: {}", summary.total);
    println!("   Evaluated: {}", summary.evaluated);
    if summary.failed() > 0 {
        println!(
            "   Fallbacks: {} JSON decode | {} bracket | {} unexpected",
            summary.json_decode, summary.bracket, summary.unexpected
        );
    }
    println!("   Duration: {:.1}s", duration);
    println!(
        "\n✅ Evaluation complete! Report saved to: {}",
        config.general.output.display()
    );

    Ok(())
}

/// Handle --dry-run: list the ideas that would be evaluated, exit.
fn handle_dry_run(ideas: &[IdeaRecord]) -> Result<()> {
    println!("\n🔍 Dry run: listing ideas (no model calls)...\n");

    if ideas.is_empty() {
        println!("   No idea rows found.");
    } else {
        for idea in ideas {
            println!("     💡 {} - {}", idea.idea, idea.description);
        }
        println!("\n   Total: {} ideas", ideas.len());
    }

    println!("\n✅ Dry run complete. No model calls were made.");
    Ok(())
}

/// Resolve the API key: CLI flag or GOOGLE_API_KEY env var first, then an
/// interactive prompt. The key is not checked here; a bad key surfaces as
/// per-row failures.
fn resolve_api_key(args: &Args) -> Result<String> {
    if let Some(ref api_key) = args.api_key {
        if !api_key.trim().is_empty() {
            debug!("Using API key from flag or environment");
            return Ok(api_key.trim().to_string());
        }
    }

    print!("Please enter your Google AI API Key: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut api_key = String::new();
    std::io::stdin()
        .read_line(&mut api_key)
        .context("Failed to read API key from stdin")?;

    Ok(api_key.trim().to_string())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .ideavet.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
