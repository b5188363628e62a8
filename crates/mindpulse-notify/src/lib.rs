//! mindpulse-notify
//!
//! Provider alerting: a structured audit record for every fired alert and,
//! when configured, an SMS to the provider through Twilio.

pub mod error;
pub mod events;
pub mod notifier;
pub mod sms;
