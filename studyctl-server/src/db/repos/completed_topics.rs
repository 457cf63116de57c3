//! Completed-topic repository

use sqlx::PgPool;

use crate::models::{CompletedTopic, NewCompletedTopic};
use crate::store::StoreResult;

/// Completed-topic repository
pub struct CompletedTopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CompletedTopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a row. The id is the caller's and is returned unchanged.
    pub async fn insert(&self, topic: &NewCompletedTopic) -> StoreResult<i32> {
        sqlx::query(
            r#"
            INSERT INTO completed_topics
                (id, subject, topic, completed_date, next_revision, revision_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(topic.id)
        .bind(&topic.subject)
        .bind(&topic.topic)
        .bind(&topic.completed_date)
        .bind(&topic.next_revision)
        .bind(topic.revision_count)
        .execute(self.pool)
        .await?;

        Ok(topic.id)
    }

    pub async fn list(&self) -> StoreResult<Vec<CompletedTopic>> {
        let rows = sqlx::query_as::<_, CompletedTopic>(
            r#"
            SELECT id, subject, topic, completed_date, next_revision, revision_count, created_at
            FROM completed_topics
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
