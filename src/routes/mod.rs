// src/routes/mod.rs

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{auth, AppState};

pub mod docs;
pub mod health;
pub mod performance;
pub mod progress;
pub mod remar;
pub mod weekly_report;
pub mod ws;

/// Assemble the full application router.
///
/// Everything under `/api` sits behind Basic Auth. `/health`, `/docs` and the
/// realtime socket are public.
pub fn build_router(state: AppState) -> Router {
    // Very permissive CORS, the dashboard is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/progress", get(progress::get_progress))
        .route("/api/mapdata", get(progress::get_map_data))
        .route("/api/progress_mock", get(progress::get_progress_mock))
        .route("/api/performance", get(performance::get_performance))
        .route("/api/weekly-report", get(weekly_report::get_weekly_report))
        // daily report (+ legacy flat path, same handler)
        .route("/api/remar", get(remar::get_remar))
        .route("/api/remar-data", get(remar::get_remar))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route(docs::DOCS_PATH, get(docs::openapi))
        .route("/ws/updates", get(ws::ws_updates))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
