//! Charity Ledger - Demonstration Binary
//!
//! Records a fixed set of donations and prints the ledger reports.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (USD, minimum 150, search "Alice")
//! cargo run --bin charity-ledger
//!
//! # Override from the command line
//! cargo run --bin charity-ledger -- --min-donation 200 --search bob --format json
//! ```
//!
//! # Environment Variables
//!
//! * `LEDGER_CURRENCY` - Ledger currency code (default: USD)
//! * `LEDGER_MIN_DONATION` - Threshold for the filtered donor report (default: 150)
//! * `LEDGER_SEARCH_NAME` - Donor to search for (default: Alice)
//! * `LEDGER_FORMAT` - `text` or `json` (default: text)
//! * `LEDGER_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{output::write_report, run_demo, CliConfig, CommandLine};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let args = CommandLine::parse_args();
    let (config, config_error) = match CliConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (CliConfig::default(), Some(e)),
    };
    let config = config.with_args(&args);

    init_tracing(&config.log_level);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring unreadable LEDGER_* configuration, using defaults");
    }

    let options = config
        .demo_options()
        .context("Invalid ledger configuration")?;

    tracing::info!(
        currency = %options.currency,
        min_donation = %options.min_donation,
        search = %options.search_name,
        "Running charity ledger demonstration"
    );

    let sections = run_demo(&options).context("Demonstration scenario failed")?;

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &sections, config.format)
        .context("Failed to write report")?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so that
/// stdout carries only the report.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
