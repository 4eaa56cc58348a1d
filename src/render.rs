use analytics::DrawdownReport;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use core_types::EquityCurve;
use risk::RiskAssessment;
use rust_decimal::Decimal;

/// Lists the inputs: starting balance, then each point with its badge.
pub fn points_table(curve: &EquityCurve) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Point", "Value"]);
    table.add_row(vec![
        Cell::new("Starting Balance"),
        Cell::new(money(curve.starting_balance())),
    ]);
    for (index, point) in curve.points().iter().enumerate() {
        let label = curve.label(index).unwrap_or_default();
        table.add_row(vec![Cell::new(label), Cell::new(money(point.value))]);
    }
    table
}

/// The drawdown figures followed by the two assessment messages.
pub fn report_table(report: &DrawdownReport, assessment: &RiskAssessment, precision: u32) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Drawdown Analysis", ""]);
    table.add_row(vec![
        Cell::new("Peak Drawdown"),
        Cell::new(percent(report.peak_drawdown_pct, precision)),
    ]);
    table.add_row(vec![
        Cell::new("Worst Drawdown"),
        Cell::new(percent(report.worst_drawdown_pct, precision)),
    ]);
    table.add_row(vec![
        Cell::new("Current Balance"),
        Cell::new(money(report.current_balance)),
    ]);
    table.add_row(vec![
        Cell::new("Risk Assessment"),
        Cell::new(assessment.tier.message()),
    ]);
    table.add_row(vec![
        Cell::new("Prop Firm Status"),
        Cell::new(assessment.prop_firm.message()),
    ]);
    table
}

pub fn percent(value: Decimal, precision: u32) -> String {
    format!("{:.*}%", precision as usize, value.round_dp(precision))
}

/// Formats an amount as dollars with thousands separators, e.g. `$101,000`.
pub fn money(value: Decimal) -> String {
    let text = value.round_dp(2).normalize().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}
