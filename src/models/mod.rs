// src/models/mod.rs

use serde::{Deserialize, Serialize};

/// One row reshaped into an ordered key-value record.
pub type Record = serde_json::Map<String, serde_json::Value>;

// ───────────────────────────────────────
// Column lists for the fixed queries
// ───────────────────────────────────────
pub const PROGRESS_COLUMNS: &[&str] = &[
    "PROJM_NO",
    "PROJM_SNAME",
    "PST",
    "PFI",
    "WORK_DAY",
    "ACTUAL_WORK_DAY",
    "COP_NO",
];

/// Same as [`PROGRESS_COLUMNS`] without the owning company.
pub const MAP_DATA_COLUMNS: &[&str] = &[
    "PROJM_NO",
    "PROJM_SNAME",
    "PST",
    "PFI",
    "WORK_DAY",
    "ACTUAL_WORK_DAY",
];

// ───────────────────────────────────────
// Mock progress
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MockProject {
    pub projm_no: String,
    pub projm_sname: String,
    pub pst: String,
    pub pfi: String,
    pub work_day: i32,
    pub actual_work_day: i32,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Planned,
}

// ───────────────────────────────────────
// Performance
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceKpi {
    pub on_time_projects: i32,     // %
    pub budget_compliance: i32,    // %
    pub quality_score: f64,        // 0..5
    pub active_projects: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub completed: i32,
    pub delayed: i32,
    pub budget: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub kpi: PerformanceKpi,
    pub monthly: Vec<MonthlySummary>,
}

// ───────────────────────────────────────
// Weekly report
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub id: String,
    pub name: String,
    pub progress: i32,
    pub start_date: String,        // YYYYMMDD
    pub end_date: String,
    pub actual_days: i32,
    pub total_days: i32,
    pub work_items: Vec<WorkItem>,
    pub operation_items: Vec<OperationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub name: String,
    pub planned_start: String,
    pub planned_end: String,
    pub actual_start: Option<String>,
    pub actual_end: Option<String>,
    pub progress: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationItem {
    pub name: String,
    pub unit: String,
    pub planned_quantity: Quantity,
    pub completed_quantity: Quantity,
    pub completion_rate: i32,
    pub notes: String,
}

/// Whole quantities serialize without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Whole(u32),
    Fraction(f64),
}

// ───────────────────────────────────────
// Test-data fixture file
// ───────────────────────────────────────
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestDataConfig {
    #[serde(default)]
    pub enable_test_data: Option<serde_json::Value>, // "Y" enables
    #[serde(default)]
    pub test_data: Record,
}
