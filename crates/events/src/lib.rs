//! # Calculator Events
//!
//! This crate defines the short, user-facing notices ("toasts") the calculator
//! raises after each attempt: a confirmation with the headline number, or a
//! destructive notice explaining why nothing was calculated.
//!
//! Notices serialize to JSON so any front-end can render them.

// Declare the modules that make up this crate.
pub mod messages;

// Re-export the core types to provide a clean public API.
pub use messages::{Notice, NoticeVariant};
