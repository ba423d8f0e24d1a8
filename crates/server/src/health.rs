use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use campus_core::dataset::CampusDataset;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

#[derive(Clone)]
pub struct HealthState {
    dataset: &'static CampusDataset,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub dataset: HealthCheck,
    pub checked_at: String,
}

pub fn router(dataset: &'static CampusDataset) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { dataset })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let dataset = dataset_check(state.dataset.integrity_issues());
    let ready = dataset.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "campus-server runtime initialized".to_string(),
        },
        dataset,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn dataset_check(issues: Vec<String>) -> HealthCheck {
    if issues.is_empty() {
        return HealthCheck { status: "ready", detail: "campus dataset loaded".to_string() };
    }

    warn!(event_name = "system.health.dataset_degraded", issues = ?issues, "dataset check failed");
    HealthCheck { status: "degraded", detail: issues.join("; ") }
}
