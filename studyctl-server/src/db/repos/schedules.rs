//! Schedule repository
//!
//! - insert: single INSERT ... RETURNING id
//! - list: full table scan, no ordering clause

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{decode_subjects, Schedule};
use crate::store::{StoreError, StoreResult};

/// Schedule record as stored, with subjects still encoded
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleRow {
    pub id: i32,
    pub duration: String,
    pub daily_time: i32,
    pub subjects: String,
    pub generated_at: String,
    pub created_at: DateTime<Utc>,
}

impl ScheduleRow {
    /// Decode the subjects blob.
    pub fn into_schedule(self) -> StoreResult<Schedule> {
        let subjects = decode_subjects(&self.subjects).map_err(|source| {
            StoreError::CorruptSubjects {
                id: self.id,
                source,
            }
        })?;

        Ok(Schedule {
            id: self.id,
            duration: self.duration,
            daily_time: self.daily_time,
            subjects,
            generated_at: self.generated_at,
            created_at: self.created_at,
        })
    }
}

/// Schedule repository
pub struct ScheduleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ScheduleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a schedule row, returning the generated id.
    pub async fn insert(
        &self,
        duration: &str,
        daily_time: i32,
        subjects_json: &str,
        generated_at: &str,
    ) -> StoreResult<i32> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO schedules (duration, daily_time, subjects, generated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(duration)
        .bind(daily_time)
        .bind(subjects_json)
        .bind(generated_at)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// All rows, subjects decoded. One corrupt row fails the whole list.
    pub async fn list(&self) -> StoreResult<Vec<Schedule>> {
        let rows: Vec<ScheduleRow> = sqlx::query_as(
            r#"
            SELECT id, duration, daily_time, subjects, generated_at, created_at
            FROM schedules
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ScheduleRow::into_schedule).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(subjects: &str) -> ScheduleRow {
        ScheduleRow {
            id: 4,
            duration: "2 weeks".into(),
            daily_time: 90,
            subjects: subjects.into(),
            generated_at: "2024-03-01T10:00:00Z".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn row_decodes_subjects() {
        let schedule = row(r#"[{"name":"Chemistry","priority":2}]"#)
            .into_schedule()
            .unwrap();
        assert_eq!(schedule.id, 4);
        assert_eq!(schedule.subjects[0].name, "Chemistry");
        assert_eq!(schedule.subjects[0].priority, 2);
    }

    #[test]
    fn corrupt_blob_is_a_store_error() {
        let err = row("{not json").into_schedule().unwrap_err();
        assert!(matches!(err, StoreError::CorruptSubjects { id: 4, .. }));
        assert!(err.to_string().contains("schedule 4"));
    }
}
