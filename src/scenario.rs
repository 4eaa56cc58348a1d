use anyhow::{Context, Result};
use core_types::{EquityCurve, EquityPoint};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A saved set of calculator inputs.
///
/// ```json
/// { "starting_balance": 100000, "points": [ { "kind": "peak", "value": 108000 } ] }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub starting_balance: Option<Decimal>,
    #[serde(default)]
    pub points: Vec<EquityPoint>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse scenario file {}", path.display()))?;
        Ok(scenario)
    }
}

/// Assembles the curve the engine will see.
///
/// The balance comes from the flag, then the file, then the configured default.
/// File points come first, followed by the `--point` arguments in the order given.
pub fn build_curve(
    scenario: Scenario,
    balance_flag: Option<Decimal>,
    extra_points: Vec<EquityPoint>,
    default_balance: Decimal,
) -> EquityCurve {
    let balance = balance_flag
        .or(scenario.starting_balance)
        .unwrap_or(default_balance);

    let mut curve = EquityCurve::new(balance);
    for point in scenario.points.into_iter().chain(extra_points) {
        curve.push_point(point);
    }
    curve
}
