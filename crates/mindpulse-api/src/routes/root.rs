use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceInfo {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "MindPulse API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}
