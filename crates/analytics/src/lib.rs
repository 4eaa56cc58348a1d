//! # Drawdown Analytics
//!
//! This crate computes the peak-to-trough percentage decline of an account
//! from a starting balance and an ordered list of labeled equity points.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `DrawdownEngine` takes the caller's points as input and
//!   produces a `DrawdownReport` as output. Nothing is stored between calls.
//!
//! ## Public API
//!
//! - `DrawdownEngine` / `compute_drawdown`: the single-pass calculation.
//! - `DrawdownReport`: peak drawdown, worst drawdown and current balance.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod report;

pub use engine::{DrawdownEngine, compute_drawdown};
pub use error::AnalyticsError;
pub use report::DrawdownReport;
