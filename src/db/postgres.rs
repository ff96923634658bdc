use std::time::Duration;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

use crate::{db::DataStore, error::AppResult};

/// Creates a PostgreSQL connection pool
///
/// The pool connects lazily, so a configured but unreachable database never blocks
/// startup; failures surface on first use.
pub fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let options: PgConnectOptions = database_url.parse()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options);

    Ok(pool)
}

/// PostgreSQL-backed [`DataStore`]
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DataStore for PostgresStore {
    async fn list_collection_names(&self, limit: usize) -> AppResult<Vec<String>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = 'public'
            ORDER BY table_name
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}
