//! Demonstration configuration

use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use core_kernel::{Currency, MoneyError};
use crate::args::CommandLine;
use crate::demo::DemoOptions;

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Text,
    /// A JSON array of sections
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// ISO 4217 code for the ledger currency
    pub currency: String,
    /// Log level
    pub log_level: String,
    /// Threshold for the filtered donor report
    pub min_donation: Decimal,
    /// Donor name looked up by the search report
    pub search_name: String,
    /// Report format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            log_level: "info".to_string(),
            min_donation: dec!(150),
            search_name: "Alice".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `LEDGER_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("LEDGER"))
            .build()?
            .try_deserialize()
    }

    /// Overrides configured values with any flags given on the command line
    pub fn with_args(mut self, args: &CommandLine) -> Self {
        if let Some(currency) = args.currency {
            self.currency = currency.code().to_string();
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        if let Some(minimum) = args.min_donation {
            self.min_donation = minimum;
        }
        if let Some(name) = &args.search {
            self.search_name = name.clone();
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        self
    }

    /// Parses the configured currency code
    pub fn currency(&self) -> Result<Currency, MoneyError> {
        self.currency.parse()
    }

    /// Options for the demonstration run
    pub fn demo_options(&self) -> Result<DemoOptions, MoneyError> {
        Ok(DemoOptions {
            currency: self.currency()?,
            min_donation: self.min_donation,
            search_name: self.search_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_reference_scenario() {
        let config = CliConfig::default();
        assert_eq!(config.currency().unwrap(), Currency::USD);
        assert_eq!(config.min_donation, dec!(150));
        assert_eq!(config.search_name, "Alice");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_config() {
        let args = CommandLine::parse_from([
            "charity-ledger",
            "--min-donation",
            "200",
            "--search",
            "bob",
            "--format",
            "json",
            "--currency",
            "eur",
        ]);
        let config = CliConfig::default().with_args(&args);

        assert_eq!(config.min_donation, dec!(200));
        assert_eq!(config.search_name, "bob");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.currency().unwrap(), Currency::EUR);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_currency_in_config() {
        let config = CliConfig {
            currency: "XXX".to_string(),
            ..CliConfig::default()
        };
        assert!(matches!(config.demo_options(), Err(MoneyError::UnknownCurrency(_))));
    }
}
