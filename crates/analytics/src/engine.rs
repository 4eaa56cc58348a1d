use crate::error::AnalyticsError;
use crate::report::DrawdownReport;
use core_types::{EquityCurve, EquityPoint, PointKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A stateless calculator for the peak-to-trough decline of an account.
#[derive(Debug, Default)]
pub struct DrawdownEngine {}

impl DrawdownEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for the drawdown calculation.
    ///
    /// # Arguments
    ///
    /// * `starting_balance` - The account value before the first point. Must be positive.
    /// * `points` - The equity points, processed in the order given.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `DrawdownReport` or an `AnalyticsError`.
    pub fn calculate(
        &self,
        starting_balance: Decimal,
        points: &[EquityPoint],
    ) -> Result<DrawdownReport, AnalyticsError> {
        self.validate(starting_balance, points)?;

        let mut running_peak = starting_balance;
        let mut max_drawdown = Decimal::ZERO;
        let mut current_balance = starting_balance;

        for point in points {
            current_balance = point.value;

            // A LOW above the running peak still lifts it.
            if point.kind == PointKind::Peak || point.value > running_peak {
                running_peak = running_peak.max(point.value);
            }

            let drawdown = percent_below(running_peak, point.value);
            max_drawdown = max_drawdown.max(drawdown);
        }

        let final_drawdown = percent_below(running_peak, current_balance);

        let report = DrawdownReport {
            peak_drawdown_pct: max_drawdown.max(final_drawdown),
            worst_drawdown_pct: max_drawdown,
            current_balance,
        };

        tracing::debug!(
            points = points.len(),
            %running_peak,
            peak_drawdown_pct = %report.peak_drawdown_pct,
            worst_drawdown_pct = %report.worst_drawdown_pct,
            "Drawdown calculated."
        );

        Ok(report)
    }

    /// Runs the calculation over a caller-owned curve.
    pub fn calculate_curve(&self, curve: &EquityCurve) -> Result<DrawdownReport, AnalyticsError> {
        self.calculate(curve.starting_balance(), curve.points())
    }

    /// Rejects input that would leave nothing to analyze or divide by zero.
    fn validate(
        &self,
        starting_balance: Decimal,
        points: &[EquityPoint],
    ) -> Result<(), AnalyticsError> {
        if points.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }
        if starting_balance <= Decimal::ZERO {
            return Err(AnalyticsError::DegenerateInput(starting_balance));
        }
        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.value < Decimal::ZERO)
        {
            return Err(AnalyticsError::NegativeEquity {
                index,
                value: point.value,
            });
        }
        Ok(())
    }
}

/// Shorthand for `DrawdownEngine::new().calculate(..)`.
pub fn compute_drawdown(
    starting_balance: Decimal,
    points: &[EquityPoint],
) -> Result<DrawdownReport, AnalyticsError> {
    DrawdownEngine::new().calculate(starting_balance, points)
}

/// How far `value` sits below `peak`, as a percentage of `peak`.
/// `peak` is always positive here; `validate` guarantees it.
fn percent_below(peak: Decimal, value: Decimal) -> Decimal {
    (peak - value) / peak * dec!(100)
}
