//! PostgreSQL-backed store

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DatabaseStatus, StoreError, StoreResult, StudyStore};
use crate::db::{self, CompletedTopicRepo, ScheduleRepo};
use crate::error::StartupError;
use crate::models::{encode_subjects, CompletedTopic, NewCompletedTopic, NewSchedule, Schedule};

/// Upper bound on the health ping; the pool's own acquire timeout is 30s.
pub const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect and make sure both tables exist.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StartupError> {
        let pool = db::create_pool(database_url, max_connections)
            .await
            .map_err(StartupError::Connect)?;
        db::initialize_schema(&pool)
            .await
            .map_err(StartupError::Schema)?;

        tracing::info!(max_connections, "Database pool ready");
        Ok(Self { pool })
    }

    /// Wrap an existing pool. The schema is assumed to exist.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StudyStore for PgStore {
    async fn insert_schedule(&self, schedule: &NewSchedule) -> StoreResult<i32> {
        let subjects_json = encode_subjects(&schedule.subjects).map_err(StoreError::Encode)?;
        ScheduleRepo::new(&self.pool)
            .insert(
                &schedule.duration,
                schedule.daily_time,
                &subjects_json,
                &schedule.generated_at,
            )
            .await
    }

    async fn list_schedules(&self) -> StoreResult<Vec<Schedule>> {
        ScheduleRepo::new(&self.pool).list().await
    }

    async fn insert_completed_topic(&self, topic: &NewCompletedTopic) -> StoreResult<i32> {
        CompletedTopicRepo::new(&self.pool).insert(topic).await
    }

    async fn list_completed_topics(&self) -> StoreResult<Vec<CompletedTopic>> {
        CompletedTopicRepo::new(&self.pool).list().await
    }

    async fn database_status(&self) -> Option<DatabaseStatus> {
        let ping = sqlx::query("SELECT 1").execute(&self.pool);
        match tokio::time::timeout(PING_TIMEOUT, ping).await {
            Ok(Ok(_)) => Some(DatabaseStatus::Connected),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Database ping failed");
                Some(DatabaseStatus::Disconnected)
            }
            Err(_) => {
                tracing::warn!(timeout = ?PING_TIMEOUT, "Database ping timed out");
                Some(DatabaseStatus::Disconnected)
            }
        }
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
