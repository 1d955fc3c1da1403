// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::error::DashboardError;

/// Database connection parameters.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub driver: String,
    pub connect_timeout: Duration,
    pub sql_dir: PathBuf,
}

impl DatabaseConfig {
    /// Build connection options for a single short-lived connection.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DashboardError> {
        if let Some(url) = &self.url {
            return url
                .parse()
                .map_err(|e| DashboardError::Config(format!("invalid DATABASE_URL: {e}")));
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password))
    }

    /// Loggable description of the target, without credentials.
    pub fn target(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

/// Basic-Auth credential, as configured.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub test_data_file: PathBuf,
    pub notify_interval: Duration,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let driver = get("SQL_DRIVER", "postgres");
        if !matches!(driver.to_ascii_lowercase().as_str(), "postgres" | "postgresql") {
            return Err(DashboardError::Config(format!(
                "unsupported SQL_DRIVER '{driver}' (expected postgres)"
            )));
        }

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            host: get("SQL_SERVER", "192.168.2.50"),
            port: parse_num("SQL_PORT", &get("SQL_PORT", "5432"))?,
            database: get("SQL_DATABASE", "PT"),
            username: get("SQL_USERNAME", "selecter"),
            password: get("SQL_PASSWORD", "YourStrongPassword!"),
            driver,
            connect_timeout: Duration::from_secs(parse_num(
                "SQL_CONNECT_TIMEOUT_SECS",
                &get("SQL_CONNECT_TIMEOUT_SECS", "5"),
            )?),
            sql_dir: PathBuf::from(get("SQL_DIR", "sql")),
        };

        let notify_secs: u64 =
            parse_num("NOTIFY_INTERVAL_SECS", &get("NOTIFY_INTERVAL_SECS", "10"))?;
        if notify_secs == 0 {
            return Err(DashboardError::Config(
                "NOTIFY_INTERVAL_SECS must be greater than zero".into(),
            ));
        }

        Ok(Self {
            host: get("HOST", "0.0.0.0"),
            port: parse_num("PORT", &get("PORT", "5000"))?,
            database,
            auth: AuthConfig {
                username: get("AUTH_USERNAME", "admin"),
                password: get("AUTH_PASSWORD", "admin"),
            },
            test_data_file: PathBuf::from(get("TEST_DATA_FILE", "test_data/test_data.json")),
            notify_interval: Duration::from_secs(notify_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_num<T>(key: &str, raw: &str) -> Result<T, DashboardError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| DashboardError::Config(format!("invalid {key} '{raw}': {e}")))
}
