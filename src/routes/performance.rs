// src/routes/performance.rs

use axum::Json;
use tracing::error;

use crate::{error::ErrorReply, mock};

/// GET /api/performance
///
/// Static KPI figures plus a six-month summary.
pub async fn get_performance() -> Result<Json<serde_json::Value>, ErrorReply> {
    let report = serde_json::to_value(mock::performance_report()).map_err(|e| {
        error!(error = %e, "performance report serialization failed");
        ErrorReply::internal(e)
    })?;
    Ok(Json(report))
}
