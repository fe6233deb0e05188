//! Reservation Mapper - Demo Binary
//!
//! Discovers the reservation mappers, runs every mapping operation once and
//! prints the report.
//!
//! # Usage
//!
//! ```bash
//! # Run against the built-in sample reservations
//! cargo run --bin reservation-mapper
//!
//! # Map a batch from a file and print JSON
//! MAPPING_INPUT_PATH=reservations.json MAPPING_OUTPUT=json cargo run --bin reservation-mapper
//! ```
//!
//! # Environment Variables
//!
//! * `MAPPING_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `MAPPING_OUTPUT` - Report format: text or json (default: text)
//! * `MAPPING_INPUT_PATH` - JSON array of Dirs21 reservations to map as the batch

use anyhow::Context;
use interface_cli::{demo, CliConfig, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config);

    tracing::info!(output = %config.output, "Starting reservation mapper");

    let report = demo::run(&config).context("demo run failed")?;
    let rendered = report
        .render(config.output)
        .context("cannot render demo report")?;
    println!("{rendered}");

    Ok(())
}

/// Loads configuration from `MAPPING_*` variables, falling back to reading
/// each variable on its own when the layered load fails.
fn load_config() -> CliConfig {
    CliConfig::from_env().unwrap_or_else(|_| {
        let defaults = CliConfig::default();
        CliConfig {
            log_level: std::env::var("MAPPING_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            output: std::env::var("MAPPING_OUTPUT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.output),
            input_path: std::env::var_os("MAPPING_INPUT_PATH").map(Into::into),
        }
    })
}

/// Initializes the tracing subscriber. Logs go to stderr so the report on
/// stdout stays parseable.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.output {
        OutputFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        OutputFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
