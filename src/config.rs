//! Service settings read from the environment (and `.env`, when present).

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where the relational store lives. A full `DATABASE_URL` wins over the `POSTGRES_*` parts.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseSettings {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match self {
            DatabaseSettings::Url(url) => {
                PgConnectOptions::from_str(url).map_err(|e| ConfigError::InvalidVar {
                    var: "DATABASE_URL",
                    reason: e.to_string(),
                })
            }
            DatabaseSettings::Parts {
                host,
                port,
                user,
                password,
                database,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database)),
        }
    }
}

/// Never prints credentials.
impl fmt::Display for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseSettings::Url(_) => write!(f, "DATABASE_URL"),
            DatabaseSettings::Parts {
                host,
                port,
                database,
                user,
                ..
            } => write!(f, "postgres://{}@{}:{}/{}", user, host, port, database),
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[derive(Clone)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub bind_addr: SocketAddr,
    pub database: DatabaseSettings,
    pub max_connections: u32,
    /// Telemetry sink connection string. Only its presence is logged at startup; no exporter
    /// is wired up. It can carry an instrumentation key, so `Debug` redacts it.
    pub telemetry_connection_string: Option<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .field("bind_addr", &self.bind_addr)
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field(
                "telemetry_connection_string",
                &self.telemetry_connection_string.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseSettings::Url(url),
            None => DatabaseSettings::Parts {
                host: require("POSTGRES_HOST")?,
                port: parse_or("POSTGRES_PORT", get("POSTGRES_PORT"), DEFAULT_POSTGRES_PORT)?,
                user: require("POSTGRES_USER")?,
                password: require("POSTGRES_PASSWORD")?,
                database: require("POSTGRES_DB")?,
            },
        };

        let bind_addr: SocketAddr =
            parse_var("BIND_ADDR", get("BIND_ADDR").as_deref().unwrap_or(DEFAULT_BIND_ADDR))?;

        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidVar {
                var: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        Ok(Settings {
            app_name: get("APP_NAME").unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            bind_addr,
            database,
            max_connections,
            telemetry_connection_string: get("TELEMETRY_CONNECTION_STRING"),
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        Some(v) => parse_var(var, &v),
        None => Ok(default),
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        var,
        reason: e.to_string(),
    })
}
