//! Service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use jiff::SignedDuration;
use mindpulse_bedrock::chat::InferenceSettings;
use mindpulse_notify::sms::SmsConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// `None` disables narrative generation; every check-in uses fallback content.
    pub bedrock_model_id: Option<String>,
    pub aws_region: String,
    pub narrative_timeout: Duration,
    pub inference: InferenceSettings,
    pub session_ttl: SignedDuration,
    pub sms: SmsConfig,
    pub log_json: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timeout_secs: u64 = parse(&lookup, "MINDPULSE_NARRATIVE_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            return Err(invalid(
                "MINDPULSE_NARRATIVE_TIMEOUT_SECS",
                "0",
                "must be at least 1",
            ));
        }

        let temperature: f32 = parse(&lookup, "MINDPULSE_TEMPERATURE", 0.7)?;
        if !(0.0..=1.0).contains(&temperature) {
            return Err(invalid(
                "MINDPULSE_TEMPERATURE",
                &temperature.to_string(),
                "must be between 0 and 1",
            ));
        }

        let ttl_minutes: i64 = parse(&lookup, "MINDPULSE_SESSION_TTL_MINUTES", 30)?;
        if ttl_minutes <= 0 {
            return Err(invalid(
                "MINDPULSE_SESSION_TTL_MINUTES",
                &ttl_minutes.to_string(),
                "must be positive",
            ));
        }

        let allowed_origins = text("MINDPULSE_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            host: text("MINDPULSE_HOST", "0.0.0.0"),
            port: parse(&lookup, "MINDPULSE_PORT", 8000)?,
            allowed_origins,
            bedrock_model_id: Some(text("MINDPULSE_BEDROCK_MODEL_ID", ""))
                .filter(|id| !id.is_empty()),
            aws_region: text("AWS_REGION", "us-east-1"),
            narrative_timeout: Duration::from_secs(timeout_secs),
            inference: InferenceSettings {
                max_tokens: parse(&lookup, "MINDPULSE_MAX_TOKENS", 1000)?,
                temperature,
            },
            session_ttl: SignedDuration::from_mins(ttl_minutes),
            sms: SmsConfig {
                enabled: flag(&lookup, "MINDPULSE_ENABLE_SMS_ALERTS")?,
                account_sid: text("TWILIO_ACCOUNT_SID", ""),
                auth_token: text("TWILIO_AUTH_TOKEN", ""),
                from_number: text("TWILIO_PHONE_NUMBER", ""),
                provider_number: text("PROVIDER_PHONE_NUMBER", ""),
                api_base: text("TWILIO_API_BASE", ""),
            },
            log_json: flag(&lookup, "MINDPULSE_LOG_JSON")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).map(|v| v.trim().to_string()) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|e: T::Err| invalid(key, &value, &e.to_string())),
        _ => Ok(default),
    }
}

fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(invalid(key, &value, "expected true or false")),
    }
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
