//! Schema creation
//!
//! A single idempotent step run before the server accepts connections.
//! There are no versioned migrations: tables are created if missing and
//! never altered.

use sqlx::PgPool;

/// Create the `schedules` and `completed_topics` tables if absent.
pub async fn initialize_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring schema exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id SERIAL PRIMARY KEY,
            duration VARCHAR(50) NOT NULL,
            daily_time INTEGER NOT NULL,
            subjects TEXT NOT NULL,
            generated_at VARCHAR(100) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Client-assigned ids, duplicates allowed: no primary key.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS completed_topics (
            id INTEGER NOT NULL,
            subject VARCHAR(100) NOT NULL,
            topic VARCHAR(200) NOT NULL,
            completed_date VARCHAR(50) NOT NULL,
            next_revision VARCHAR(50) NOT NULL,
            revision_count INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn schema_creation_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 2).await.expect("pool creation failed");

        initialize_schema(&pool).await.expect("first run failed");
        initialize_schema(&pool).await.expect("second run failed");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_name IN ('schedules', 'completed_topics') ORDER BY table_name",
        )
        .fetch_all(&pool)
        .await
        .expect("query failed");

        assert_eq!(
            tables,
            vec![("completed_topics".to_string(),), ("schedules".to_string(),)]
        );
    }
}
