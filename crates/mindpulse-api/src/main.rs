use std::sync::Arc;
use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_config::Region;
use mindpulse_api::config::Settings;
use mindpulse_api::state::AppState;
use mindpulse_bedrock::narrator::{BedrockNarrator, NarratorConfig};
use mindpulse_narrative::generator::{NarrativeGenerator, OfflineGenerator};
use mindpulse_notify::notifier::AlertNotifier;
use mindpulse_storage::sessions::{InMemorySessionStore, SessionStore};
use tracing_subscriber::EnvFilter;

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(settings.log_json);

    let narrator = build_narrator(&settings).await?;
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(settings.session_ttl));
    let notifier = Arc::new(AlertNotifier::new(settings.sms.clone()));

    tracing::info!(
        narrative_model = narrator.is_available(),
        sms_alerts = ?notifier.plan(),
        session_ttl_mins = settings.session_ttl.as_mins(),
        "starting mindpulse-api"
    );

    tokio::spawn(purge_sessions(Arc::clone(&sessions)));

    let state = AppState {
        narrator,
        sessions,
        notifier,
    };
    let app = mindpulse_api::app(state, &settings.allowed_origins);

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_narrator(settings: &Settings) -> eyre::Result<Arc<dyn NarrativeGenerator>> {
    let Some(model_id) = settings.bedrock_model_id.clone() else {
        tracing::warn!("MINDPULSE_BEDROCK_MODEL_ID not set, check-ins will use fallback narratives");
        return Ok(Arc::new(OfflineGenerator));
    };

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.aws_region.clone()))
        .load()
        .await;

    let narrator = BedrockNarrator::new(
        &sdk_config,
        NarratorConfig {
            model_id,
            inference: settings.inference,
            timeout: settings.narrative_timeout,
        },
    )?;
    tracing::info!(model_id = narrator.model_id(), "bedrock narrator configured");
    Ok(Arc::new(narrator))
}

async fn purge_sessions(sessions: Arc<dyn SessionStore>) {
    let mut interval = tokio::time::interval(PURGE_INTERVAL);
    loop {
        interval.tick().await;
        match sessions.purge_expired() {
            Ok(0) => {}
            Ok(purged) => tracing::debug!(purged, "expired chat sessions purged"),
            Err(e) => tracing::warn!(error = %e, "session purge failed"),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
