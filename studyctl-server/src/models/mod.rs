//! Domain models and their JSON wire shapes
//!
//! Field names on the wire are camelCase. Type errors are caught by serde
//! during extraction; `validate()` covers what serde cannot express.

pub mod validation;
pub mod schedule;
pub mod completed_topic;

pub use validation::{Validate, ValidationError};
pub use schedule::{decode_subjects, encode_subjects, NewSchedule, Schedule, Subject};
pub use completed_topic::{CompletedTopic, NewCompletedTopic};
