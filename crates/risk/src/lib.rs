//! Buckets a drawdown percentage into the qualitative messages the calculator
//! shows next to its numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod assessor;
pub mod error;

pub use assessor::RiskAssessor;
pub use error::RiskError;

/// How conservative a drawdown is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Excellent,
    Acceptable,
    HighRisk,
}

impl RiskTier {
    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::Excellent => "🟢 Excellent - Conservative risk management",
            RiskTier::Acceptable => "🟡 Acceptable - Monitor your risk carefully",
            RiskTier::HighRisk => "🔴 High Risk - Consider reducing position sizes",
        }
    }
}

/// Whether a drawdown would survive a typical prop-firm evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropFirmStatus {
    Pass,
    Borderline,
    Fail,
}

impl PropFirmStatus {
    pub fn message(&self) -> &'static str {
        match self {
            PropFirmStatus::Pass => "✅ Would pass most prop firm rules (5% limit)",
            PropFirmStatus::Borderline => "⚠️ Check individual prop firm limits",
            PropFirmStatus::Fail => "❌ Exceeds most prop firm limits",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for PropFirmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub drawdown_pct: Decimal,
    pub tier: RiskTier,
    pub prop_firm: PropFirmStatus,
}

/// Turns a drawdown percentage into a qualitative assessment.
pub trait RiskPolicy {
    fn assess(&self, drawdown_pct: Decimal) -> RiskAssessment;
}
