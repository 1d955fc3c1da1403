// src/db/mod.rs

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{Column, Connection, Executor, PgConnection, Row, TypeInfo, ValueRef};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::error::DashboardError;
use crate::models::{Record, MAP_DATA_COLUMNS, PROGRESS_COLUMNS};

/// The fixed set of queries the API can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedQuery {
    Progress,
    MapData,
    Remar,
}

impl NamedQuery {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Progress => "progress.sql",
            Self::MapData => "mapdata.sql",
            Self::Remar => "remar.sql",
        }
    }

    /// Keys to zip each row against. `None` means use the returned column names.
    pub fn columns(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Progress => Some(PROGRESS_COLUMNS),
            Self::MapData => Some(MAP_DATA_COLUMNS),
            Self::Remar => None,
        }
    }
}

/// Source of report rows. Handlers only see this trait.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn fetch(&self, query: NamedQuery) -> Result<Vec<Record>, DashboardError>;
}

/// [`ReportStore`] backed by a short-lived Postgres connection per call.
#[derive(Debug, Clone)]
pub struct SqlReportStore {
    options: PgConnectOptions,
    sql_dir: PathBuf,
    connect_timeout: Duration,
}

impl SqlReportStore {
    pub fn new(options: PgConnectOptions, sql_dir: impl Into<PathBuf>, connect_timeout: Duration) -> Self {
        Self {
            options,
            sql_dir: sql_dir.into(),
            connect_timeout,
        }
    }

    pub fn from_config(cfg: &DatabaseConfig) -> Result<Self, DashboardError> {
        Ok(Self::new(cfg.connect_options()?, &cfg.sql_dir, cfg.connect_timeout))
    }

    async fn connect(&self) -> Result<PgConnection, DashboardError> {
        tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&self.options))
            .await
            .map_err(|_| DashboardError::ConnectTimeout(self.connect_timeout))?
            .map_err(DashboardError::Connect)
    }

    async fn load_sql(&self, query: NamedQuery) -> Result<String, DashboardError> {
        let path = self.sql_dir.join(query.file_name());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| DashboardError::QueryFile { path, source })
    }

    async fn run(&self, conn: &mut PgConnection, query: NamedQuery) -> Result<Vec<Record>, DashboardError> {
        let sql = self.load_sql(query).await?;
        // Unprepared: the simple protocol returns every cell in text format,
        // which `cell_to_json` relies on for its fallback arm.
        let rows = (&mut *conn).fetch_all(sql.as_str()).await?;
        debug!(query = query.file_name(), rows = rows.len(), "query finished");

        rows.iter()
            .map(|row| match query.columns() {
                Some(columns) => zip_fixed(row, columns),
                None => zip_returned(row),
            })
            .collect()
    }
}

#[async_trait]
impl ReportStore for SqlReportStore {
    async fn fetch(&self, query: NamedQuery) -> Result<Vec<Record>, DashboardError> {
        let mut conn = self.connect().await?;
        let result = self.run(&mut conn, query).await;
        if let Err(e) = conn.close().await {
            warn!(error = %e, "closing database connection failed");
        }
        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row reshaping
// ─────────────────────────────────────────────────────────────────────────────

fn zip_fixed(row: &PgRow, columns: &[&str]) -> Result<Record, DashboardError> {
    check_width(columns.len(), row.len())?;
    columns
        .iter()
        .enumerate()
        .map(|(idx, key)| Ok(((*key).to_owned(), cell_to_json(row, idx)?)))
        .collect()
}

fn zip_returned(row: &PgRow) -> Result<Record, DashboardError> {
    row.columns()
        .iter()
        .map(|col| Ok((col.name().to_owned(), cell_to_json(row, col.ordinal())?)))
        .collect()
}

fn check_width(expected: usize, found: usize) -> Result<(), DashboardError> {
    if found < expected {
        return Err(DashboardError::ColumnMismatch { expected, found });
    }
    Ok(())
}

/// Render one cell as JSON based on its Postgres type.
///
/// Rows must come from the simple query protocol. Types without an arm
/// (UUID, TIME, INTERVAL, enums, arrays, ...) are returned as their text
/// rendering.
fn cell_to_json(row: &PgRow, idx: usize) -> Result<Value, sqlx::Error> {
    let type_name = {
        let raw = row.try_get_raw(idx)?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        raw.type_info().name().to_owned()
    };

    let value = match type_name.as_str() {
        "BOOL" => Value::from(row.try_get::<bool, _>(idx)?),
        "INT2" => Value::from(row.try_get::<i16, _>(idx)?),
        "INT4" => Value::from(row.try_get::<i32, _>(idx)?),
        "INT8" => Value::from(row.try_get::<i64, _>(idx)?),
        "FLOAT4" => Value::from(row.try_get::<f32, _>(idx)?),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(idx)?),
        "NUMERIC" => decimal_to_json(row.try_get::<Decimal, _>(idx)?),
        "DATE" => Value::from(format_date(row.try_get::<NaiveDate, _>(idx)?)),
        "TIMESTAMP" => Value::from(format_timestamp(row.try_get::<NaiveDateTime, _>(idx)?)),
        "TIMESTAMPTZ" => Value::from(row.try_get::<DateTime<Utc>, _>(idx)?.to_rfc3339()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(idx)?,
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::from(row.try_get::<String, _>(idx)?),
        _ => Value::from(row.try_get_unchecked::<String, _>(idx)?),
    };
    Ok(value)
}

fn decimal_to_json(d: Decimal) -> Value {
    if d.scale() == 0 {
        if let Some(i) = d.to_i64() {
            return Value::from(i);
        }
    }
    d.to_f64().map_or_else(|| Value::String(d.to_string()), Value::from)
}

fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn query_files_and_columns() {
        assert_eq!(NamedQuery::Progress.file_name(), "progress.sql");
        assert_eq!(NamedQuery::MapData.columns().unwrap().len(), 6);
        assert_eq!(NamedQuery::Progress.columns().unwrap()[6], "COP_NO");
        assert!(NamedQuery::Remar.columns().is_none());
    }

    #[test]
    fn short_rows_are_rejected() {
        assert!(check_width(7, 7).is_ok());
        assert!(check_width(6, 9).is_ok());
        let err = check_width(7, 5).unwrap_err();
        assert!(matches!(err, DashboardError::ColumnMismatch { expected: 7, found: 5 }));
    }

    #[test]
    fn decimals_render_as_numbers() {
        assert_eq!(decimal_to_json(Decimal::from_str("42").unwrap()), Value::from(42));
        assert_eq!(decimal_to_json(Decimal::from_str("12.50").unwrap()), Value::from(12.5));
    }

    #[test]
    fn dates_render_iso() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_date(d), "2024-02-29");
        let ts = d.and_hms_opt(23, 5, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-02-29 23:05:00");
    }

    #[tokio::test]
    async fn unreachable_database_fails_fast() {
        let options = PgConnectOptions::new().host("127.0.0.1").port(1).database("pt");
        let store = SqlReportStore::new(options, "sql", Duration::from_secs(2));
        let err = store.fetch(NamedQuery::Progress).await.unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Connect(_) | DashboardError::ConnectTimeout(_)
        ));
    }
}
