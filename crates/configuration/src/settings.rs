use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorSettings,
    pub risk_thresholds: RiskThresholds,
}

/// Defaults applied to a fresh calculation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// The account value used when the caller does not supply one.
    pub starting_balance: Decimal,
    /// Decimal places shown for percentages.
    pub precision: u32,
}

/// Upper bounds, in percent, of each risk bucket. A drawdown equal to a
/// bound belongs to the lower bucket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub excellent_max_pct: Decimal,
    pub acceptable_max_pct: Decimal,
    /// The limit most prop firms enforce.
    pub prop_pass_max_pct: Decimal,
    pub prop_borderline_max_pct: Decimal,
}

/// How the command-line front-end prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            starting_balance: dec!(100000),
            precision: 2,
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            excellent_max_pct: dec!(2),
            acceptable_max_pct: dec!(5),
            prop_pass_max_pct: dec!(5),
            prop_borderline_max_pct: dec!(10),
        }
    }
}

impl Config {
    /// Checks the values a file or the environment may have broken.
    /// Threshold ordering is checked by the risk crate when it builds its policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calculator.starting_balance <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(format!(
                "calculator.starting_balance must be greater than 0, got {}",
                self.calculator.starting_balance
            )));
        }
        if self.calculator.precision > 10 {
            return Err(ConfigError::ValidationError(format!(
                "calculator.precision must be at most 10, got {}",
                self.calculator.precision
            )));
        }
        Ok(())
    }
}
