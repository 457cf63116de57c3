//! In-process store
//!
//! Holds rows in insertion order behind a tokio RwLock. Nothing survives a
//! restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{DatabaseStatus, StoreError, StoreResult, StudyStore};
use crate::db::ScheduleRow;
use crate::models::{encode_subjects, CompletedTopic, NewCompletedTopic, NewSchedule, Schedule};

#[derive(Default)]
struct Tables {
    schedules: Vec<ScheduleRow>,
    completed_topics: Vec<CompletedTopic>,
    last_schedule_id: i32,
}

/// Store that keeps everything in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudyStore for MemoryStore {
    async fn insert_schedule(&self, schedule: &NewSchedule) -> StoreResult<i32> {
        let subjects = encode_subjects(&schedule.subjects).map_err(StoreError::Encode)?;

        let mut tables = self.tables.write().await;
        let id = tables
            .last_schedule_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        tables.last_schedule_id = id;
        tables.schedules.push(ScheduleRow {
            id,
            duration: schedule.duration.clone(),
            daily_time: schedule.daily_time,
            subjects,
            generated_at: schedule.generated_at.clone(),
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn list_schedules(&self) -> StoreResult<Vec<Schedule>> {
        let tables = self.tables.read().await;
        tables
            .schedules
            .iter()
            .cloned()
            .map(ScheduleRow::into_schedule)
            .collect()
    }

    async fn insert_completed_topic(&self, topic: &NewCompletedTopic) -> StoreResult<i32> {
        let stored = CompletedTopic::from_new(topic.clone(), Utc::now());
        let id = stored.id;
        self.tables.write().await.completed_topics.push(stored);
        Ok(id)
    }

    async fn list_completed_topics(&self) -> StoreResult<Vec<CompletedTopic>> {
        Ok(self.tables.read().await.completed_topics.clone())
    }

    async fn database_status(&self) -> Option<DatabaseStatus> {
        None
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;

    fn schedule(duration: &str) -> NewSchedule {
        NewSchedule {
            duration: duration.into(),
            daily_time: 60,
            subjects: vec![
                Subject {
                    name: "Biology".into(),
                    priority: 2,
                },
                Subject {
                    name: "Art".into(),
                    priority: 5,
                },
            ],
            generated_at: "2024-05-05T08:00:00Z".into(),
        }
    }

    fn topic(id: i32) -> NewCompletedTopic {
        NewCompletedTopic {
            id,
            subject: "Math".into(),
            topic: "Derivatives".into(),
            completed_date: "2024-05-05".into(),
            next_revision: "2024-05-08".into(),
            revision_count: 0,
        }
    }

    #[tokio::test]
    async fn schedule_ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_schedule(&schedule("a")).await.unwrap(), 1);
        assert_eq!(store.insert_schedule(&schedule("b")).await.unwrap(), 2);
        assert_eq!(store.insert_schedule(&schedule("c")).await.unwrap(), 3);

        let ids: Vec<i32> = store
            .list_schedules()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn subjects_keep_their_order() {
        let store = MemoryStore::new();
        let new = schedule("30 days");
        store.insert_schedule(&new).await.unwrap();

        let stored = store.list_schedules().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].subjects, new.subjects);
        assert_eq!(stored[0].duration, "30 days");
    }

    #[tokio::test]
    async fn duplicate_topic_ids_are_kept() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_completed_topic(&topic(42)).await.unwrap(), 42);
        assert_eq!(store.insert_completed_topic(&topic(42)).await.unwrap(), 42);
        assert_eq!(store.insert_completed_topic(&topic(3)).await.unwrap(), 3);

        let ids: Vec<i32> = store
            .list_completed_topics()
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![42, 42, 3]);
    }

    #[tokio::test]
    async fn corrupt_row_fails_the_listing() {
        let store = MemoryStore::new();
        store.insert_schedule(&schedule("ok")).await.unwrap();
        {
            let mut tables = store.tables.write().await;
            tables.schedules[0].subjects = "[{\"name\":".into();
        }

        let err = store.list_schedules().await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptSubjects { id: 1, .. }));
    }

    #[tokio::test]
    async fn exhausted_ids_fail_without_storing() {
        let store = MemoryStore::new();
        store.tables.write().await.last_schedule_id = i32::MAX;

        let err = store.insert_schedule(&schedule("late")).await.unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted));
        assert!(store.list_schedules().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn has_no_database_status() {
        assert_eq!(MemoryStore::new().database_status().await, None);
    }
}
