//! mindpulse-storage
//!
//! Conversation session storage behind the [`sessions::SessionStore`] trait.

pub mod error;
pub mod sessions;
