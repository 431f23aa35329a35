use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect to Postgres. The whole API is read-mostly bulk fetches plus
/// single-row writes, so a small pool with a short acquire timeout is
/// plenty.
pub async fn create_pool(database_url: &str) -> PgPool {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Database pool ready");
    pool
}
