use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a drawdown calculation.
///
/// `peak_drawdown_pct` folds the drawdown of the final balance into the
/// running maximum, so it is never below `worst_drawdown_pct`. In practice the
/// two are usually equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownReport {
    pub peak_drawdown_pct: Decimal,
    pub worst_drawdown_pct: Decimal,
    pub current_balance: Decimal,
}

impl DrawdownReport {
    /// Rounds both percentages for display.
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            peak_drawdown_pct: self.peak_drawdown_pct.round_dp(dp),
            worst_drawdown_pct: self.worst_drawdown_pct.round_dp(dp),
            current_balance: self.current_balance,
        }
    }
}
