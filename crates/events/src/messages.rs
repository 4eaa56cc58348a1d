use analytics::{AnalyticsError, DrawdownReport};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A short message shown to the user after a calculation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub timestamp: DateTime<Utc>,
    pub variant: NoticeVariant,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(variant: NoticeVariant, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            variant,
            title: title.into(),
            description: description.into(),
        }
    }

    /// The confirmation raised after a successful calculation.
    pub fn calculation_complete(report: &DrawdownReport) -> Self {
        Self::new(
            NoticeVariant::Default,
            "Calculation Complete",
            format!("Peak drawdown: {}%", two_places(report.peak_drawdown_pct)),
        )
    }

    /// The notice raised instead of a result when the engine refuses the input.
    pub fn from_error(err: &AnalyticsError) -> Self {
        tracing::debug!(error = %err, "Raising destructive notice.");
        match err {
            AnalyticsError::EmptyInput => Self::new(
                NoticeVariant::Destructive,
                "No Data",
                "Please add some equity points to calculate drawdown.",
            ),
            AnalyticsError::DegenerateInput(_) | AnalyticsError::NegativeEquity { .. } => {
                Self::new(NoticeVariant::Destructive, "Invalid Input", err.to_string())
            }
        }
    }

    /// Builds the notice for either outcome of a calculation.
    pub fn for_outcome(outcome: &Result<DrawdownReport, AnalyticsError>) -> Self {
        match outcome {
            Ok(report) => Self::calculation_complete(report),
            Err(err) => Self::from_error(err),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Formats a percentage with exactly two decimals, e.g. `6.48` or `0.00`.
fn two_places(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn success_notice_shows_two_decimals() {
        let report = DrawdownReport {
            peak_drawdown_pct: dec!(6.481481481481481481481481481),
            worst_drawdown_pct: dec!(6.481481481481481481481481481),
            current_balance: dec!(101000),
        };
        let notice = Notice::calculation_complete(&report);
        assert_eq!(notice.title, "Calculation Complete");
        assert_eq!(notice.description, "Peak drawdown: 6.48%");
        assert!(!notice.is_destructive());
    }

    #[test]
    fn zero_drawdown_is_padded() {
        let report = DrawdownReport {
            peak_drawdown_pct: Decimal::ZERO,
            worst_drawdown_pct: Decimal::ZERO,
            current_balance: dec!(115000),
        };
        assert_eq!(
            Notice::calculation_complete(&report).description,
            "Peak drawdown: 0.00%"
        );
    }

    #[test]
    fn empty_input_asks_for_points() {
        let notice = Notice::for_outcome(&Err(AnalyticsError::EmptyInput));
        assert_eq!(notice.title, "No Data");
        assert_eq!(
            notice.description,
            "Please add some equity points to calculate drawdown."
        );
        assert!(notice.is_destructive());
    }

    #[test]
    fn degenerate_input_explains_itself() {
        let notice = Notice::from_error(&AnalyticsError::DegenerateInput(dec!(0)));
        assert_eq!(notice.title, "Invalid Input");
        assert!(notice.description.contains("greater than zero"));
    }

    #[test]
    fn serializes_variant_lowercase() {
        let notice = Notice::from_error(&AnalyticsError::EmptyInput);
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains("\"variant\":\"destructive\""));
        assert!(json.contains("\"title\":\"No Data\""));
    }
}
