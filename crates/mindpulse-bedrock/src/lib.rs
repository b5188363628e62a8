//! mindpulse-bedrock
//!
//! Bedrock Converse adapter for narrative generation and counselor chat.

pub mod chat;
pub mod error;
pub mod narrator;
