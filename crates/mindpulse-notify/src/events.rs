use mindpulse_core::models::alert::AlertDecision;
use mindpulse_core::models::risk::RiskLevel;
use serde::Serialize;
use tracing::warn;

/// Audit record for a fired provider alert.
///
/// Logged via `tracing` whether or not an SMS is sent, so every alert
/// condition leaves a trace in the service logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertAuditEvent {
    pub risk_level: RiskLevel,
    pub concerns: Vec<String>,
    pub concerning_factors: u8,
    pub triggers: Vec<&'static str>,
    pub user_id: Option<String>,
}

impl AlertAuditEvent {
    pub fn from_decision(decision: &AlertDecision, user_id: Option<&str>) -> Self {
        Self {
            risk_level: decision.risk_level,
            concerns: decision.concerns.iter().map(|tag| tag.as_str().to_string()).collect(),
            concerning_factors: decision.concerning_factors,
            triggers: decision.triggers.iter().map(|t| t.as_str()).collect(),
            user_id: user_id.map(str::to_string),
        }
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        warn!(
            audit.action = "provider_alert",
            audit.risk_level = %self.risk_level,
            audit.concerns = %self.concerns.join(", "),
            audit.concerning_factors = self.concerning_factors,
            audit.triggers = %self.triggers.join(", "),
            audit.user_id = self.user_id.as_deref().unwrap_or("anonymous"),
            "audit event"
        );
    }
}
