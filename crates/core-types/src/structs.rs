use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::enums::PointKind;
use crate::error::CoreError;

/// The balance the calculator starts from when the user has not entered one.
pub const DEFAULT_STARTING_BALANCE: Decimal = dec!(100000);

/// An opaque handle identifying a single point within an `EquityCurve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(Uuid);

impl PointId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single labeled observation of account equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    #[serde(default)]
    pub id: PointId,
    pub value: Decimal,
    pub kind: PointKind,
}

impl EquityPoint {
    pub fn new(kind: PointKind, value: Decimal) -> Self {
        Self {
            id: PointId::new(),
            value,
            kind,
        }
    }

    pub fn peak(value: Decimal) -> Self {
        Self::new(PointKind::Peak, value)
    }

    pub fn low(value: Decimal) -> Self {
        Self::new(PointKind::Low, value)
    }
}

/// Parses the `<kind>:<value>` shorthand used on the command line,
/// e.g. `peak:108000` or `low:101000.50`.
impl FromStr for EquityPoint {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s.split_once(':').ok_or_else(|| {
            CoreError::InvalidInput(
                "equity point".to_string(),
                format!("expected '<peak|low>:<value>', got '{s}'"),
            )
        })?;

        let kind = kind.parse::<PointKind>()?;
        let value = Decimal::from_str(value.trim()).map_err(|e| {
            CoreError::InvalidInput("equity point value".to_string(), format!("'{value}': {e}"))
        })?;

        Ok(Self::new(kind, value))
    }
}

/// The caller-owned, ordered list of equity points together with the balance
/// the account started from.
///
/// Points keep the order in which they were added; nothing here sorts them.
/// All editing happens on this structure, and the drawdown engine only ever
/// receives the finished slice returned by `points()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityCurve {
    starting_balance: Decimal,
    #[serde(default)]
    points: Vec<EquityPoint>,
}

impl EquityCurve {
    /// Creates an empty curve starting from `starting_balance`.
    pub fn new(starting_balance: Decimal) -> Self {
        Self {
            starting_balance,
            points: Vec::new(),
        }
    }

    pub fn starting_balance(&self) -> Decimal {
        self.starting_balance
    }

    pub fn set_starting_balance(&mut self, value: Decimal) {
        self.starting_balance = value;
    }

    pub fn points(&self) -> &[EquityPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: PointId) -> Option<&EquityPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Appends a new point of `kind`, valued at the current starting balance.
    pub fn add_point(&mut self, kind: PointKind) -> PointId {
        self.push(kind, self.starting_balance)
    }

    /// Appends a new point with an explicit value.
    pub fn push(&mut self, kind: PointKind, value: Decimal) -> PointId {
        let point = EquityPoint::new(kind, value);
        let id = point.id;
        self.points.push(point);
        tracing::trace!(%id, %kind, %value, "Equity point added.");
        id
    }

    /// Appends an already-built point, keeping its id.
    pub fn push_point(&mut self, point: EquityPoint) {
        self.points.push(point);
    }

    pub fn update_point(&mut self, id: PointId, value: Decimal) -> Result<(), CoreError> {
        let point = self
            .points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::PointNotFound(id))?;
        point.value = value;
        Ok(())
    }

    pub fn remove_point(&mut self, id: PointId) -> Result<EquityPoint, CoreError> {
        let index = self
            .points
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::PointNotFound(id))?;
        Ok(self.points.remove(index))
    }

    /// Drops every point and puts the starting balance back to its default.
    pub fn clear(&mut self) {
        self.points.clear();
        self.starting_balance = DEFAULT_STARTING_BALANCE;
    }

    /// The badge shown for the point at `index`, e.g. `PEAK #1`.
    pub fn label(&self, index: usize) -> Option<String> {
        self.points
            .get(index)
            .map(|p| format!("{} #{}", p.kind.badge(), index + 1))
    }
}

/// The calculator's initial state: a 100,000 account that ran up to 108,000
/// and then fell back to 101,000.
impl Default for EquityCurve {
    fn default() -> Self {
        let mut curve = Self::new(DEFAULT_STARTING_BALANCE);
        curve.push(PointKind::Peak, dec!(108000));
        curve.push(PointKind::Low, dec!(101000));
        curve
    }
}
