use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub records: RecordInfo,
}

#[derive(Serialize)]
pub struct RecordInfo {
    pub courses: usize,
    pub games: usize,
}

/// Returns server status and record counts as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (courses, games) = {
        let records = state.records.read().await;
        (records.courses().len(), records.games().len())
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        records: RecordInfo { courses, games },
    })
}
