//! mindpulse-narrative
//!
//! Turns a triaged check-in into the response shown to the person: prompt
//! rendering for the narrative model, a tolerant parser for its reply,
//! deterministic fallback content and the assembler that merges them.

pub mod assemble;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod render;
