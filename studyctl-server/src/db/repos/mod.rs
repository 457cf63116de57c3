//! Repository implementations for database access
//!
//! One repository per table. Both tables are append-only, so each exposes
//! only `insert` and `list`.

pub mod schedules;
pub mod completed_topics;

pub use schedules::{ScheduleRepo, ScheduleRow};
pub use completed_topics::CompletedTopicRepo;
