use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Nothing to analyze: no equity points were supplied")]
    EmptyInput,

    #[error("Starting balance must be greater than zero, got {0}")]
    DegenerateInput(Decimal),

    #[error("Equity point #{} has a negative value ({value})", .index + 1)]
    NegativeEquity { index: usize, value: Decimal },
}
