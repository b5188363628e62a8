//! Twilio SMS delivery.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use mindpulse_core::models::risk::RiskLevel;
use serde::Deserialize;

use crate::error::NotifyError;

pub const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio credentials and the numbers an alert is sent between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsConfig {
    pub enabled: bool,
    pub account_sid: String,
    pub auth_token: String,
    /// Twilio number the SMS is sent from.
    pub from_number: String,
    /// Provider number the SMS is sent to.
    pub provider_number: String,
    /// Overrides [`TWILIO_API_BASE`] when non-empty.
    pub api_base: String,
}

/// What the notifier will do with a fired alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPlan {
    Disabled,
    Incomplete,
    Send,
}

impl SmsConfig {
    pub fn is_complete(&self) -> bool {
        [
            &self.account_sid,
            &self.auth_token,
            &self.from_number,
            &self.provider_number,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }

    pub fn plan(&self) -> DeliveryPlan {
        if !self.enabled {
            DeliveryPlan::Disabled
        } else if !self.is_complete() {
            DeliveryPlan::Incomplete
        } else {
            DeliveryPlan::Send
        }
    }

    fn messages_url(&self) -> String {
        let base = match self.api_base.trim() {
            "" => TWILIO_API_BASE,
            custom => custom.trim_end_matches('/'),
        };
        format!("{base}/Accounts/{}/Messages.json", self.account_sid)
    }

    fn authorization(&self) -> String {
        let credentials = format!("{}:{}", self.account_sid, self.auth_token);
        format!("Basic {}", BASE64.encode(credentials))
    }
}

/// SMS text for a provider alert.
pub fn format_alert_body(risk_level: RiskLevel, concerns: &[String]) -> String {
    let concerns_text = if concerns.is_empty() {
        "multiple factors".to_string()
    } else {
        concerns.join(", ")
    };
    let heading = risk_level.as_str().to_ascii_uppercase();

    format!(
        "MindPulse Alert - {heading} Risk\n\
         \n\
         Patient check-in shows concerning patterns:\n\
         - Risk Level: {risk_level}\n\
         - Concerns: {concerns_text}\n\
         \n\
         Please review patient status.\n\
         - MindPulse System"
    )
}

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// Send one SMS through the Twilio Messages endpoint and return its SID.
///
/// Blocking; run it off the async executor.
pub fn send_sms(config: &SmsConfig, body: &str) -> Result<String, NotifyError> {
    let mut response = ureq::post(&config.messages_url())
        .header("Authorization", &config.authorization())
        .send_form([
            ("To", config.provider_number.as_str()),
            ("From", config.from_number.as_str()),
            ("Body", body),
        ])?;

    let text = response.body_mut().read_to_string()?;
    let resource: MessageResource = serde_json::from_str(&text)
        .map_err(|e| NotifyError::Response(format!("missing message sid: {e}")))?;
    Ok(resource.sid)
}
