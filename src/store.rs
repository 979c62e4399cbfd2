//! Data store gateway: owns the PostgreSQL pool and hands out per-request sessions.

use crate::error::{AppError, ConfigError};
use crate::schema;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use std::sync::{Arc, RwLock};

/// Pool lifecycle is explicit: nothing is reachable until [`Gateway::connect`] succeeds,
/// and [`Gateway::disconnect`] drops the pool again. Clones share the same pool.
#[derive(Clone)]
pub struct Gateway {
    options: PgConnectOptions,
    max_connections: u32,
    pool: Arc<RwLock<Option<PgPool>>>,
}

impl Gateway {
    pub fn new(options: PgConnectOptions, max_connections: u32) -> Self {
        Gateway {
            options,
            max_connections,
            pool: Arc::new(RwLock::new(None)),
        }
    }

    /// Open the pool and make sure both tables exist. A no-op when already connected.
    /// Failure is logged and returned; there is no retry.
    pub async fn connect(&self) -> Result<(), AppError> {
        if self.is_connected() {
            return Ok(());
        }
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(self.options.clone())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to connect to database");
                AppError::Db(e)
            })?;
        if let Err(e) = schema::ensure_tables(&pool).await {
            tracing::error!(error = %e, "failed to create tables");
            pool.close().await;
            return Err(AppError::Db(e));
        }
        let mut guard = self.pool.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.is_none() {
            *guard = Some(pool);
            tracing::info!(max_connections = self.max_connections, "database connected");
        }
        Ok(())
    }

    /// Close every pooled connection. Safe to call when not connected.
    pub async fn disconnect(&self) {
        let pool = self
            .pool
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(pool) = pool {
            pool.close().await;
            tracing::info!("database disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.pool.read().map(|g| g.is_some()).unwrap_or(false)
    }

    fn pool(&self) -> Result<PgPool, AppError> {
        let guard = self.pool.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone().ok_or(AppError::Config(ConfigError::NotConnected))
    }

    /// Begin one unit of work on a pooled connection.
    pub async fn acquire_session(&self) -> Result<Session, AppError> {
        let pool = self.pool()?;
        let tx = pool.begin().await?;
        Ok(Session { tx })
    }

    /// Round-trip a trivial query. Backs `GET /ready`.
    pub async fn ping(&self) -> Result<(), AppError> {
        let pool = self.pool()?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }
}

/// One logical unit of work. Dropping a session without [`Session::commit`] rolls it back;
/// either way the connection goes back to the pool.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
