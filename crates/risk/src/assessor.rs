use crate::error::RiskError;
use crate::{PropFirmStatus, RiskAssessment, RiskPolicy, RiskTier};
use configuration::RiskThresholds;
use rust_decimal::Decimal;

/// A simple, concrete implementation of the `RiskPolicy` trait.
///
/// Each bucket is closed at its upper bound: a drawdown of exactly 5% is still
/// `Acceptable` and still passes prop-firm rules.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    thresholds: RiskThresholds,
}

impl RiskAssessor {
    /// Creates a new `RiskAssessor` with the given thresholds.
    pub fn new(thresholds: RiskThresholds) -> Result<Self, RiskError> {
        let t = &thresholds;
        for (name, value) in [
            ("excellent_max_pct", t.excellent_max_pct),
            ("acceptable_max_pct", t.acceptable_max_pct),
            ("prop_pass_max_pct", t.prop_pass_max_pct),
            ("prop_borderline_max_pct", t.prop_borderline_max_pct),
        ] {
            if value < Decimal::ZERO {
                return Err(RiskError::InvalidParameters(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if t.excellent_max_pct > t.acceptable_max_pct {
            return Err(RiskError::InvalidParameters(
                "excellent_max_pct must not exceed acceptable_max_pct".to_string(),
            ));
        }
        if t.prop_pass_max_pct > t.prop_borderline_max_pct {
            return Err(RiskError::InvalidParameters(
                "prop_pass_max_pct must not exceed prop_borderline_max_pct".to_string(),
            ));
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn tier(&self, drawdown_pct: Decimal) -> RiskTier {
        if drawdown_pct <= self.thresholds.excellent_max_pct {
            RiskTier::Excellent
        } else if drawdown_pct <= self.thresholds.acceptable_max_pct {
            RiskTier::Acceptable
        } else {
            RiskTier::HighRisk
        }
    }

    pub fn prop_firm_status(&self, drawdown_pct: Decimal) -> PropFirmStatus {
        if drawdown_pct <= self.thresholds.prop_pass_max_pct {
            PropFirmStatus::Pass
        } else if drawdown_pct <= self.thresholds.prop_borderline_max_pct {
            PropFirmStatus::Borderline
        } else {
            PropFirmStatus::Fail
        }
    }
}

impl RiskPolicy for RiskAssessor {
    fn assess(&self, drawdown_pct: Decimal) -> RiskAssessment {
        let assessment = RiskAssessment {
            drawdown_pct,
            tier: self.tier(drawdown_pct),
            prop_firm: self.prop_firm_status(drawdown_pct),
        };
        tracing::debug!(
            %drawdown_pct,
            tier = ?assessment.tier,
            prop_firm = ?assessment.prop_firm,
            "Drawdown assessed."
        );
        assessment
    }
}
