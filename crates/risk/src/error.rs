use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RiskError {
    #[error("Risk thresholds from configuration are invalid: {0}")]
    InvalidParameters(String),
}
