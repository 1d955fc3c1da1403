// src/routes/progress.rs

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::warn;

use crate::{db::NamedQuery, error::ErrorReply, mock, models::MockProject, AppState};

/// GET /api/progress
pub async fn get_progress(State(state): State<AppState>) -> Response {
    fetch_inline(&state, NamedQuery::Progress).await
}

/// GET /api/mapdata
pub async fn get_map_data(State(state): State<AppState>) -> Response {
    fetch_inline(&state, NamedQuery::MapData).await
}

/// GET /api/progress_mock
pub async fn get_progress_mock() -> Json<Vec<MockProject>> {
    Json(mock::mock_projects(Local::now()))
}

// Failures keep a 200 status and carry the message in the body.
async fn fetch_inline(state: &AppState, query: NamedQuery) -> Response {
    match state.store.fetch(query).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!(query = query.file_name(), error = %e, "progress query failed");
            ErrorReply::inline(e).into_response()
        }
    }
}
