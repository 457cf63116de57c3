//! Completed-topic records
//!
//! The `id` is assigned by the client, not by storage, and is not unique:
//! posting the same id twice stores two rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{check_len, Validate, ValidationError};

pub const MAX_SUBJECT_LEN: usize = 100;
pub const MAX_TOPIC_LEN: usize = 200;
pub const MAX_DATE_LEN: usize = 50;

/// Body of `POST /api/completed-topics`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompletedTopic {
    pub id: i32,
    pub subject: String,
    pub topic: String,
    pub completed_date: String,
    pub next_revision: String,
    pub revision_count: i32,
}

impl Validate for NewCompletedTopic {
    /// Check field widths against the storage layout.
    fn validate(&self) -> Result<(), ValidationError> {
        check_len("subject", &self.subject, MAX_SUBJECT_LEN)?;
        check_len("topic", &self.topic, MAX_TOPIC_LEN)?;
        check_len("completedDate", &self.completed_date, MAX_DATE_LEN)?;
        check_len("nextRevision", &self.next_revision, MAX_DATE_LEN)?;
        Ok(())
    }
}

/// A stored completed topic as returned by `GET /api/completed-topics`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTopic {
    pub id: i32,
    pub subject: String,
    pub topic: String,
    pub completed_date: String,
    pub next_revision: String,
    pub revision_count: i32,
    pub created_at: DateTime<Utc>,
}

impl CompletedTopic {
    /// Attach a storage timestamp to an incoming record.
    pub fn from_new(new: NewCompletedTopic, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            subject: new.subject,
            topic: new.topic,
            completed_date: new.completed_date,
            next_revision: new.next_revision,
            revision_count: new.revision_count,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"id":7,"subject":"Math","topic":"Limits","completedDate":"2024-01-01","nextRevision":"2024-01-04","revisionCount":0}"#;

    #[test]
    fn deserializes_camel_case_body() {
        let parsed: NewCompletedTopic = serde_json::from_str(BODY).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.completed_date, "2024-01-01");
        assert_eq!(parsed.next_revision, "2024-01-04");
        assert_eq!(parsed.revision_count, 0);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn string_revision_count_is_rejected() {
        let body = BODY.replace(r#""revisionCount":0"#, r#""revisionCount":"zero""#);
        assert!(serde_json::from_str::<NewCompletedTopic>(&body).is_err());
    }

    #[test]
    fn overlong_topic_fails_validation() {
        let mut parsed: NewCompletedTopic = serde_json::from_str(BODY).unwrap();
        parsed.topic = "t".repeat(MAX_TOPIC_LEN + 1);
        assert_eq!(
            parsed.validate(),
            Err(ValidationError::TooLong {
                field: "topic",
                max: MAX_TOPIC_LEN
            })
        );
    }

    #[test]
    fn from_new_keeps_client_id() {
        let parsed: NewCompletedTopic = serde_json::from_str(BODY).unwrap();
        let stored = CompletedTopic::from_new(parsed, Utc::now());
        assert_eq!(stored.id, 7);
        assert_eq!(stored.topic, "Limits");
    }
}
