// src/routes/remar.rs

use axum::{extract::State, Json};
use tracing::{debug, warn};

use crate::{db::NamedQuery, error::ErrorReply, models::Record, AppState};

/// GET /api/remar and the legacy GET /api/remar-data
///
/// Daily report rows, with the test-data record appended when it is enabled.
pub async fn get_remar(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ErrorReply> {
    let mut rows = state.store.fetch(NamedQuery::Remar).await.map_err(|e| {
        warn!(error = %e, "daily report query failed");
        ErrorReply::fault(e)
    })?;

    let fixture = state.test_data.load().await.map_err(|e| {
        warn!(error = %e, "test data unavailable");
        ErrorReply::fault(e)
    })?;
    if let Some(record) = fixture {
        debug!("appending test data record");
        rows.push(record);
    }

    Ok(Json(rows))
}
