//! # Core Types
//!
//! Layer 0 data model shared by every other crate in the workspace: the
//! `PointKind` tag, the `EquityPoint` observation and the caller-owned,
//! editable `EquityCurve`.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::PointKind;
pub use error::CoreError;
pub use structs::{DEFAULT_STARTING_BALANCE, EquityCurve, EquityPoint, PointId};
