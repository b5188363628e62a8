//! mindpulse-core
//!
//! Pure domain types for the daily check-in pipeline.
//! Shared vocabulary of the MindPulse system. No I/O and no model dependency.

pub mod error;
pub mod models;
