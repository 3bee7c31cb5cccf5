//! travelbrief - CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use travelbrief::config::{get_api_key, get_timeout, load_dotenv};
use travelbrief::llm::generator::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE};
use travelbrief::llm::retry::{
    DEFAULT_ATTEMPTS_PER_MODEL, DEFAULT_MODELS, DEFAULT_QUOTA_WAIT_SECS, DEFAULT_RETRY_DELAY_SECS,
};
use travelbrief::{GeminiClient, GenerationParams, Purpose, RetryPolicy, summarize};

/// Generate a structured travel summary for a place using Gemini.
#[derive(Parser, Debug)]
#[command(name = "travelbrief")]
#[command(about = "Generate a structured travel summary for a place using Gemini")]
#[command(version)]
struct Cli {
    /// Place to summarize, e.g. "Lisbon, Portugal"
    place: String,

    /// Trip purpose: leisure or business (case-insensitive)
    purpose: Purpose,

    /// Model to try, in priority order (repeatable; defaults to the built-in list)
    #[arg(long = "model", value_name = "ID")]
    models: Vec<String>,

    /// Attempts per model before falling back to the next one
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS_PER_MODEL, value_parser = clap::value_parser!(u32).range(1..))]
    retries: u32,

    /// Seconds to wait after an ordinary failure
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_RETRY_DELAY_SECS)]
    retry_delay: u64,

    /// Seconds to wait after a quota / rate-limit failure
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_QUOTA_WAIT_SECS)]
    quota_wait: u64,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Maximum number of tokens to generate
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_TOKENS)]
    max_output_tokens: u32,

    /// Retry when the model replies without a usable JSON object
    #[arg(long)]
    retry_unparseable: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn retry_policy(&self) -> RetryPolicy {
        let models = if self.models.is_empty() {
            DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
        } else {
            self.models.clone()
        };

        RetryPolicy {
            models,
            attempts_per_model: self.retries,
            retry_delay: Duration::from_secs(self.retry_delay),
            quota_wait: Duration::from_secs(self.quota_wait),
            retry_unparseable: self.retry_unparseable,
        }
    }

    fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Usage errors exit with 1 rather than clap's default of 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);
    load_dotenv();

    let api_key = get_api_key()?;
    let client = GeminiClient::new(api_key, get_timeout())?;

    let summary = summarize(
        &client,
        &cli.place,
        cli.purpose,
        &cli.retry_policy(),
        &cli.generation_params(),
    )
    .await
    .with_context(|| format!("Failed to summarize {} for a {} trip", cli.place, cli.purpose))?;

    let json = summary
        .to_pretty_json()
        .context("Failed to serialize travel summary")?;
    println!("{}", json);

    Ok(ExitCode::SUCCESS)
}

/// Send logs to stderr so stdout carries only the JSON result.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
