use mindpulse_core::models::alert::{AlertDecision, AlertTrigger};
use mindpulse_core::models::concern::{ConcernSet, ConcernTag};
use mindpulse_core::models::risk::RiskLevel;
use mindpulse_notify::events::AlertAuditEvent;
use mindpulse_notify::notifier::{AlertNotifier, NotifyOutcome};
use mindpulse_notify::error::NotifyError;
use mindpulse_notify::sms::{DeliveryPlan, SmsConfig, format_alert_body, send_sms};

fn complete_config() -> SmsConfig {
    SmsConfig {
        enabled: true,
        account_sid: "AC123".to_string(),
        auth_token: "secret".to_string(),
        from_number: "+15550000001".to_string(),
        provider_number: "+15550000002".to_string(),
        // Nothing listens on the discard port, so delivery fails fast.
        api_base: "http://127.0.0.1:9".to_string(),
    }
}

fn fired_decision() -> AlertDecision {
    AlertDecision {
        should_alert: true,
        risk_level: RiskLevel::High,
        concerns: [ConcernTag::MissedMedication, ConcernTag::LowMood]
            .into_iter()
            .collect(),
        concerning_factors: 2,
        triggers: vec![
            AlertTrigger::HighRiskWithFactors,
            AlertTrigger::CriticalMoodWithoutMedication,
        ],
    }
}

#[test]
fn alert_body_names_risk_and_concerns() {
    let body = format_alert_body(
        RiskLevel::High,
        &["missed_medication".to_string(), "low_mood".to_string()],
    );
    assert!(body.starts_with("MindPulse Alert - HIGH Risk\n"));
    assert!(body.contains("- Risk Level: high\n"));
    assert!(body.contains("- Concerns: missed_medication, low_mood\n"));
    assert!(body.contains("Please review patient status."));
}

#[test]
fn alert_body_without_concerns_mentions_multiple_factors() {
    let body = format_alert_body(RiskLevel::Moderate, &[]);
    assert!(body.starts_with("MindPulse Alert - MODERATE Risk"));
    assert!(body.contains("- Concerns: multiple factors"));
}

#[test]
fn delivery_plan_follows_configuration() {
    assert_eq!(SmsConfig::default().plan(), DeliveryPlan::Disabled);

    let mut config = complete_config();
    assert!(config.is_complete());
    assert_eq!(config.plan(), DeliveryPlan::Send);

    config.provider_number = "  ".to_string();
    assert!(!config.is_complete());
    assert_eq!(config.plan(), DeliveryPlan::Incomplete);

    config.enabled = false;
    assert_eq!(config.plan(), DeliveryPlan::Disabled);
}

#[test]
fn audit_event_snapshots_the_decision() {
    let event = AlertAuditEvent::from_decision(&fired_decision(), Some("user-7"));
    assert_eq!(event.risk_level, RiskLevel::High);
    assert_eq!(event.concerns, vec!["missed_medication", "low_mood"]);
    assert_eq!(
        event.triggers,
        vec!["high_risk_with_factors", "critical_mood_without_medication"]
    );
    assert_eq!(event.user_id.as_deref(), Some("user-7"));
}

#[test]
fn no_alert_means_nothing_happens() {
    let decision = AlertDecision {
        should_alert: false,
        risk_level: RiskLevel::Low,
        concerns: ConcernSet::empty(),
        concerning_factors: 0,
        triggers: Vec::new(),
    };
    let notifier = AlertNotifier::new(complete_config());
    assert_eq!(notifier.notify(&decision, None), NotifyOutcome::NotRequired);
}

#[test]
fn disabled_sms_still_audits() {
    let notifier = AlertNotifier::default();
    assert_eq!(notifier.notify(&fired_decision(), None), NotifyOutcome::Logged);
}

#[test]
fn incomplete_sms_config_is_logged_only() {
    let mut config = complete_config();
    config.auth_token.clear();
    let notifier = AlertNotifier::new(config);
    assert_eq!(notifier.notify(&fired_decision(), None), NotifyOutcome::Logged);
}

#[test]
fn dispatch_outside_a_runtime_does_not_panic() {
    let notifier = AlertNotifier::new(complete_config());
    assert_eq!(notifier.notify(&fired_decision(), None), NotifyOutcome::Logged);
}

#[tokio::test]
async fn complete_config_dispatches_sms_in_the_background() {
    let notifier = AlertNotifier::new(complete_config());
    assert_eq!(
        notifier.notify(&fired_decision(), Some("patient-7")),
        NotifyOutcome::SmsDispatched
    );
}

#[test]
fn unreachable_provider_is_a_transport_error() {
    let err = send_sms(&complete_config(), "test").unwrap_err();
    assert!(matches!(err, NotifyError::Transport(_)), "{err:?}");
}
