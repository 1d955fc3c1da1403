// src/mock/mod.rs

//! Literal fixtures served by the endpoints that do not touch the database.

use chrono::{DateTime, Duration, Local};

use crate::models::{
    MockProject, MonthlySummary, OperationItem, PerformanceKpi, PerformanceReport, ProjectStatus,
    Quantity, WeeklyReport, WorkItem,
};

const DATE_FMT: &str = "%Y-%m-%d";

/// (no, short name, PST offset, PFI offset, work days, actual work days, status)
const MOCK_PROJECTS: [(&str, &str, i64, i64, i32, i32, ProjectStatus); 5] = [
    ("P2023001", "台北商辦大樓", -60, 120, 180, 60, ProjectStatus::Active),
    ("P2023002", "新竹科技園區", -90, 90, 180, 90, ProjectStatus::Active),
    ("P2023003", "台中住宅社區", -150, -30, 120, 120, ProjectStatus::Completed),
    ("P2023004", "高雄港口擴建", -45, 135, 180, 45, ProjectStatus::Active),
    ("P2023005", "花蓮觀光飯店", 30, 210, 180, 0, ProjectStatus::Planned),
];

/// The five mock projects, with planned dates placed relative to `now`.
pub fn mock_projects(now: DateTime<Local>) -> Vec<MockProject> {
    let shifted = |days: i64| (now + Duration::days(days)).format(DATE_FMT).to_string();

    MOCK_PROJECTS
        .iter()
        .map(|&(no, name, pst, pfi, work_day, actual, status)| MockProject {
            projm_no: no.into(),
            projm_sname: name.into(),
            pst: shifted(pst),
            pfi: shifted(pfi),
            work_day,
            actual_work_day: actual,
            status,
        })
        .collect()
}

pub fn performance_report() -> PerformanceReport {
    let month = |month: &str, completed, delayed, budget| MonthlySummary {
        month: month.into(),
        completed,
        delayed,
        budget,
    };

    PerformanceReport {
        kpi: PerformanceKpi {
            on_time_projects: 85,
            budget_compliance: 92,
            quality_score: 4.7,
            active_projects: 12,
        },
        monthly: vec![
            month("一月", 2, 1, 85),
            month("二月", 3, 0, 95),
            month("三月", 1, 1, 90),
            month("四月", 4, 1, 88),
            month("五月", 2, 0, 92),
            month("六月", 3, 2, 85),
        ],
    }
}

fn work(
    name: &str,
    planned: (&str, &str),
    actual: (Option<&str>, Option<&str>),
    progress: i32,
) -> WorkItem {
    WorkItem {
        name: name.into(),
        planned_start: planned.0.into(),
        planned_end: planned.1.into(),
        actual_start: actual.0.map(Into::into),
        actual_end: actual.1.map(Into::into),
        progress,
    }
}

fn op(
    name: &str,
    unit: &str,
    planned: Quantity,
    completed: Quantity,
    completion_rate: i32,
) -> OperationItem {
    let notes = if completion_rate >= 100 { "已完成" } else { "進行中" };
    OperationItem {
        name: name.into(),
        unit: unit.into(),
        planned_quantity: planned,
        completed_quantity: completed,
        completion_rate,
        notes: notes.into(),
    }
}

/// Two-project weekly report with work items and operation quantities.
pub fn weekly_reports() -> Vec<WeeklyReport> {
    use Quantity::{Fraction, Whole};

    vec![
        WeeklyReport {
            id: "P001".into(),
            name: "台北商辦大樓".into(),
            progress: 65,
            start_date: "20230315".into(),
            end_date: "20240520".into(),
            actual_days: 180,
            total_days: 280,
            work_items: vec![
                work("基礎工程", ("20230315", "20230615"), (Some("20230320"), Some("20230620")), 100),
                work("結構工程", ("20230601", "20231015"), (Some("20230610"), Some("20231020")), 100),
                work("機電工程", ("20230815", "20240215"), (Some("20230825"), None), 70),
                work("裝修工程", ("20231115", "20240415"), (Some("20231125"), None), 40),
                work("驗收", ("20240415", "20240520"), (None, None), 0),
            ],
            operation_items: vec![
                op("鋼筋綁紮", "噸", Whole(450), Whole(450), 100),
                op("模板組立", "㎡", Whole(12000), Whole(12000), 100),
                op("混凝土澆置", "㎥", Whole(8500), Whole(8500), 100),
                op("機電管線", "式", Whole(1), Fraction(0.7), 70),
                op("內部裝修", "㎡", Whole(9500), Whole(3800), 40),
            ],
        },
        WeeklyReport {
            id: "P002".into(),
            name: "新竹科技園區".into(),
            progress: 80,
            start_date: "20230110".into(),
            end_date: "20240310".into(),
            actual_days: 220,
            total_days: 270,
            work_items: vec![
                work("基礎工程", ("20230110", "20230410"), (Some("20230115"), Some("20230415")), 100),
                work("結構工程", ("20230401", "20230815"), (Some("20230405"), Some("20230820")), 100),
                work("機電工程", ("20230715", "20231215"), (Some("20230720"), Some("20231220")), 100),
                work("裝修工程", ("20231015", "20240215"), (Some("20231020"), None), 75),
                work("驗收", ("20240215", "20240310"), (None, None), 0),
            ],
            operation_items: vec![
                op("鋼筋綁紮", "噸", Whole(380), Whole(380), 100),
                op("模板組立", "㎡", Whole(10500), Whole(10500), 100),
                op("混凝土澆置", "㎥", Whole(7200), Whole(7200), 100),
                op("機電管線", "式", Whole(1), Whole(1), 100),
                op("內部裝修", "㎡", Whole(8200), Whole(6150), 75),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn five_projects_with_relative_dates() {
        let projects = mock_projects(fixed_now());
        assert_eq!(projects.len(), 5);
        assert_eq!(projects[0].pst, "2024-01-01");
        assert_eq!(projects[0].pfi, "2024-06-29");
        assert_eq!(projects[2].status, ProjectStatus::Completed);
        assert_eq!(projects[4].pst, "2024-03-31");
        assert_eq!(projects[4].actual_work_day, 0);
    }

    #[test]
    fn mock_project_keys_are_upper_case() {
        let value = serde_json::to_value(&mock_projects(fixed_now())[0]).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["PROJM_NO", "PROJM_SNAME", "PST", "PFI", "WORK_DAY", "ACTUAL_WORK_DAY", "STATUS"]
        );
        assert_eq!(value["STATUS"], "active");
    }

    #[test]
    fn performance_has_six_months() {
        let report = performance_report();
        assert_eq!(report.monthly.len(), 6);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kpi"]["qualityScore"], 4.7);
        assert_eq!(json["kpi"]["onTimeProjects"], 85);
    }

    #[test]
    fn weekly_quantities_keep_integer_shape() {
        let json = serde_json::to_value(weekly_reports()).unwrap();
        let first = &json[0]["operationItems"];
        assert_eq!(first[0]["plannedQuantity"].to_string(), "450");
        assert_eq!(first[3]["completedQuantity"].to_string(), "0.7");
        assert_eq!(first[3]["notes"], "進行中");
        assert!(json[0]["workItems"][4]["actualStart"].is_null());
        assert_eq!(json[1]["workItems"][3]["progress"], 75);
    }
}
