//! Database layer: pool construction, migrations, and repositories.
//!
//! The pool is created once at startup and passed by reference into every
//! repository call; nothing in this crate holds global state.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use vetclinic_core::error::CoreError;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL (e.g. `sqlite://vet_clinic.db`).
///
/// Foreign-key enforcement is switched on for every connection; it is the
/// sole mechanism guaranteeing parent rows exist at insert time.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations. Idempotent; safe to run on every start.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Classify a sqlx error into the domain error taxonomy.
///
/// Constraint violations are recognized by [`sqlx::error::ErrorKind`], not
/// by matching driver message strings. `RowNotFound` is not handled here:
/// repositories use `fetch_optional` and produce `NotFound` themselves with
/// the entity name and id.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> CoreError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            sqlx::error::ErrorKind::UniqueViolation
            | sqlx::error::ErrorKind::ForeignKeyViolation
            | sqlx::error::ErrorKind::NotNullViolation
            | sqlx::error::ErrorKind::CheckViolation => {
                CoreError::Constraint(db_err.message().to_string())
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                CoreError::Storage(db_err.message().to_string())
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            CoreError::Storage(other.to_string())
        }
    }
}
