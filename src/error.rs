// src/error.rs

use std::path::PathBuf;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Failures that can occur while serving dashboard data.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database connection timed out after {}s", .0.as_secs())]
    ConnectTimeout(Duration),

    #[error("SQL file not found: {}", path.display())]
    QueryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("row has {found} columns, expected at least {expected}")]
    ColumnMismatch { expected: usize, found: usize },

    #[error("cannot access test data file {}: {source}", path.display())]
    TestDataIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("test data file is not valid JSON: {0}")]
    TestDataFormat(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// The three error body shapes the API exposes.
///
/// Which one an endpoint uses is part of that endpoint's contract and is
/// chosen at the call site, not derived from the error.
#[derive(Debug)]
pub enum ErrorReply {
    /// `200 OK` with `{"error": msg}`.
    Inline(String),
    /// `500` with `{"error": msg}`.
    Internal(String),
    /// `500` with `{"message": msg, "status": "error", "statusCode": "500"}`.
    Fault(String),
}

impl ErrorReply {
    pub fn inline(e: impl std::fmt::Display) -> Self {
        Self::Inline(e.to_string())
    }

    pub fn internal(e: impl std::fmt::Display) -> Self {
        Self::Internal(e.to_string())
    }

    pub fn fault(e: impl std::fmt::Display) -> Self {
        Self::Fault(e.to_string())
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        match self {
            Self::Inline(msg) => {
                (StatusCode::OK, Json(serde_json::json!({ "error": msg }))).into_response()
            }
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            Self::Fault(msg) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = serde_json::json!({
                    "message": msg,
                    "status": "error",
                    "statusCode": status.as_u16().to_string(),
                });
                (status, Json(body)).into_response()
            }
        }
    }
}
