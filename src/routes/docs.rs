// src/routes/docs.rs

//! OpenAPI description of the `/api` surface, served at `GET /docs`.

use axum::Json;
use serde_json::{json, Value};

use crate::models::{MAP_DATA_COLUMNS, PROGRESS_COLUMNS};

pub const DOCS_PATH: &str = "/docs";

pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

fn string_props(columns: &[&str]) -> Value {
    let props: serde_json::Map<String, Value> = columns
        .iter()
        .map(|c| ((*c).to_owned(), json!({})))
        .collect();
    json!({ "type": "object", "properties": props })
}

fn list_of(schema: &str) -> Value {
    json!({
        "200": {
            "description": "OK",
            "content": { "application/json": { "schema": {
                "type": "array",
                "items": { "$ref": format!("#/components/schemas/{schema}") }
            } } }
        },
        "401": { "description": "Authentication required" }
    })
}

pub fn openapi_document() -> Value {
    let remar = json!({
        "summary": "Daily progress report rows, plus the test-data record when enabled",
        "responses": list_of("DailyReportRecord"),
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Progress Dashboard API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "security": [ { "basicAuth": [] } ],
        "paths": {
            "/api/progress": { "get": {
                "summary": "Project progress list",
                "responses": list_of("ProjectProgress"),
            } },
            "/api/mapdata": { "get": {
                "summary": "Project progress subset for the map view",
                "responses": list_of("MapData"),
            } },
            "/api/progress_mock": { "get": {
                "summary": "Five mock projects with dates relative to today",
                "responses": list_of("MockProject"),
            } },
            "/api/performance": { "get": {
                "summary": "KPI figures and monthly summary",
                "responses": { "200": { "description": "OK" }, "500": { "description": "Error" } },
            } },
            "/api/weekly-report": { "get": {
                "summary": "Weekly report for two projects",
                "responses": { "200": { "description": "OK" } },
            } },
            "/api/remar": { "get": remar.clone() },
            "/api/remar-data": { "get": remar },
        },
        "components": {
            "securitySchemes": { "basicAuth": { "type": "http", "scheme": "basic" } },
            "schemas": {
                "ProjectProgress": string_props(PROGRESS_COLUMNS),
                "MapData": string_props(MAP_DATA_COLUMNS),
                "MockProject": string_props(&[
                    "PROJM_NO", "PROJM_SNAME", "PST", "PFI", "WORK_DAY", "ACTUAL_WORK_DAY", "STATUS",
                ]),
                "DailyReportRecord": { "type": "object", "additionalProperties": true },
            },
        },
    })
}
