use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The label a user attaches to an equity observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Peak,
    Low,
}

impl PointKind {
    /// The upper-case badge shown next to a point in the calculator list.
    pub fn badge(&self) -> &'static str {
        match self {
            PointKind::Peak => "PEAK",
            PointKind::Low => "LOW",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKind::Peak => write!(f, "peak"),
            PointKind::Low => write!(f, "low"),
        }
    }
}

impl FromStr for PointKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "peak" => Ok(PointKind::Peak),
            "low" => Ok(PointKind::Low),
            other => Err(CoreError::InvalidInput(
                "point kind".to_string(),
                format!("expected 'peak' or 'low', got '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("PEAK".parse::<PointKind>().unwrap(), PointKind::Peak);
        assert_eq!(" low ".parse::<PointKind>().unwrap(), PointKind::Low);
        assert!("trough".parse::<PointKind>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&PointKind::Peak).unwrap();
        assert_eq!(json, "\"peak\"");
        let kind: PointKind = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(kind, PointKind::Low);
    }
}
