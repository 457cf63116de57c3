//! Storage abstraction
//!
//! Route handlers talk to [`StudyStore`] only. Two implementations exist:
//! - [`PgStore`]: PostgreSQL via sqlx, used in production
//! - [`MemoryStore`]: ordered in-process lists, used by tests and `serve --memory`
//!
//! Both keep schedule subjects as JSON text and decode them on read, so a
//! corrupt blob fails the same way in either.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::{CompletedTopic, NewCompletedTopic, NewSchedule, Schedule};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised while reading or writing records
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to encode subjects: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored subjects for schedule {id} are not valid JSON: {source}")]
    CorruptSubjects {
        id: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("schedule ids exhausted")]
    IdsExhausted,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Reachability of the backing database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// Append-only storage for schedules and completed topics
#[async_trait]
pub trait StudyStore: Send + Sync {
    /// Append a schedule, returning its storage-assigned id.
    async fn insert_schedule(&self, schedule: &NewSchedule) -> StoreResult<i32>;

    /// All schedules in storage order.
    async fn list_schedules(&self) -> StoreResult<Vec<Schedule>>;

    /// Append a completed topic, returning the caller-supplied id.
    async fn insert_completed_topic(&self, topic: &NewCompletedTopic) -> StoreResult<i32>;

    /// All completed topics in storage order.
    async fn list_completed_topics(&self) -> StoreResult<Vec<CompletedTopic>>;

    /// Database reachability, or `None` when there is no database.
    async fn database_status(&self) -> Option<DatabaseStatus>;

    /// Release connections. Called once on shutdown.
    async fn close(&self);
}
