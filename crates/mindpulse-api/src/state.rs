use std::sync::Arc;

use mindpulse_narrative::generator::NarrativeGenerator;
use mindpulse_notify::notifier::AlertNotifier;
use mindpulse_storage::sessions::SessionStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub narrator: Arc<dyn NarrativeGenerator>,
    pub sessions: Arc<dyn SessionStore>,
    pub notifier: Arc<AlertNotifier>,
}
