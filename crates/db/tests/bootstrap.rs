//! Bootstrap tests: migrations, health check, schema presence.

use sqlx::SqlitePool;

/// Full bootstrap: migrate, verify schema, health check.
#[sqlx::test(migrations = "./migrations")]
async fn full_bootstrap(pool: SqlitePool) {
    vetclinic_db::health_check(&pool).await.unwrap();

    // All three tables must exist and start empty.
    for table in ["clients", "pets", "appointments"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Foreign-key enforcement must be active on pool connections; it is the
/// sole mechanism guaranteeing parent rows exist at insert time.
#[sqlx::test(migrations = "./migrations")]
async fn foreign_keys_are_enforced(pool: SqlitePool) {
    let enabled: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled.0, 1, "PRAGMA foreign_keys should be ON");
}

/// The email unique index from the initial migration must be present.
#[sqlx::test(migrations = "./migrations")]
async fn email_unique_index_exists(pool: SqlitePool) {
    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master
         WHERE type = 'index' AND name = 'uq_clients_email'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1);
}
