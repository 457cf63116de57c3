//! Route handlers organized by resource

pub mod health;
pub mod schedules;
pub mod completed_topics;

use serde::Serialize;

/// Body returned by the create endpoints
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T> {
    pub message: &'static str,
    pub id: i32,
    /// The accepted payload, echoed back
    pub data: T,
}
