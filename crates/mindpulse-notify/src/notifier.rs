use mindpulse_core::models::alert::AlertDecision;
use tracing::{error, info, warn};

use crate::events::AlertAuditEvent;
use crate::sms::{DeliveryPlan, SmsConfig, format_alert_body, send_sms};

/// What happened to an alert decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The decision did not call for an alert.
    NotRequired,
    /// Audited only; SMS is disabled, misconfigured or no runtime was available.
    Logged,
    /// Audited and an SMS was handed to a background task.
    SmsDispatched,
}

/// Delivers provider alerts.
///
/// Delivery is fire-and-forget: the SMS runs on a detached blocking task and
/// its result is only logged.
#[derive(Debug, Clone, Default)]
pub struct AlertNotifier {
    sms: SmsConfig,
}

impl AlertNotifier {
    pub fn new(sms: SmsConfig) -> Self {
        Self { sms }
    }

    pub fn plan(&self) -> DeliveryPlan {
        self.sms.plan()
    }

    pub fn notify(&self, decision: &AlertDecision, user_id: Option<&str>) -> NotifyOutcome {
        if !decision.should_alert {
            return NotifyOutcome::NotRequired;
        }

        let event = AlertAuditEvent::from_decision(decision, user_id);
        event.emit();

        match self.sms.plan() {
            DeliveryPlan::Disabled => {
                info!("SMS alerts disabled, skipping provider notification");
                NotifyOutcome::Logged
            }
            DeliveryPlan::Incomplete => {
                warn!("SMS configuration incomplete, cannot send provider alert");
                NotifyOutcome::Logged
            }
            DeliveryPlan::Send => self.dispatch(format_alert_body(event.risk_level, &event.concerns)),
        }
    }

    fn dispatch(&self, body: String) -> NotifyOutcome {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime, provider SMS not sent");
            return NotifyOutcome::Logged;
        };

        let config = self.sms.clone();
        // Detached: the join handle is dropped and nobody awaits delivery.
        drop(handle.spawn_blocking(move || match send_sms(&config, &body) {
            Ok(sid) => info!(sid = %sid, "provider alert sent"),
            Err(e) => error!(error = %e, "failed to send provider alert"),
        }));

        NotifyOutcome::SmsDispatched
    }
}
