//! Schedule records
//!
//! A schedule's subjects are persisted as a JSON text blob, so the
//! encode/decode pair here is the only place that format is defined.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{check_len, Validate, ValidationError};

/// Width of the `schedules.duration` column
pub const MAX_DURATION_LEN: usize = 50;

/// Width of the `schedules.generated_at` column
pub const MAX_GENERATED_AT_LEN: usize = 100;

/// A weighted subject inside a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub priority: i32,
}

/// Body of `POST /api/schedule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub duration: String,
    pub daily_time: i32,
    pub subjects: Vec<Subject>,
    pub generated_at: String,
}

impl Validate for NewSchedule {
    /// Check field widths against the storage layout.
    fn validate(&self) -> Result<(), ValidationError> {
        check_len("duration", &self.duration, MAX_DURATION_LEN)?;
        check_len("generatedAt", &self.generated_at, MAX_GENERATED_AT_LEN)?;
        Ok(())
    }
}

/// A stored schedule as returned by `GET /api/schedule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i32,
    pub duration: String,
    pub daily_time: i32,
    pub subjects: Vec<Subject>,
    pub generated_at: String,
    pub created_at: DateTime<Utc>,
}

/// Encode subjects into the text stored in `schedules.subjects`.
pub fn encode_subjects(subjects: &[Subject]) -> Result<String, serde_json::Error> {
    serde_json::to_string(subjects)
}

/// Decode the text stored in `schedules.subjects`.
pub fn decode_subjects(raw: &str) -> Result<Vec<Subject>, serde_json::Error> {
    serde_json::from_str(raw)
}
