use analytics::{DrawdownEngine, DrawdownReport};
use core_types::EquityCurve;
use events::Notice;
use risk::{RiskAssessment, RiskPolicy};
use serde::Serialize;
use std::process::ExitCode;

/// Everything one calculation produces; `--format json` prints it as is.
///
/// `report` and `assessment` are absent when the engine refused the input,
/// `notice` is always there.
#[derive(Debug, Serialize)]
pub struct CalculationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<DrawdownReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<RiskAssessment>,
    pub notice: Notice,
}

impl CalculationOutput {
    pub fn succeeded(&self) -> bool {
        !self.notice.is_destructive()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Runs the engine over `curve` and assesses the result.
pub fn evaluate(curve: &EquityCurve, policy: &impl RiskPolicy, precision: u32) -> CalculationOutput {
    let outcome = DrawdownEngine::new().calculate_curve(curve);
    let notice = Notice::for_outcome(&outcome);

    match outcome {
        Ok(report) => {
            // Bucket the unrounded figure; only the display is rounded.
            let assessment = policy.assess(report.peak_drawdown_pct);
            CalculationOutput {
                report: Some(report.rounded(precision)),
                assessment: Some(assessment),
                notice,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Drawdown not calculated.");
            CalculationOutput {
                report: None,
                assessment: None,
                notice,
            }
        }
    }
}
