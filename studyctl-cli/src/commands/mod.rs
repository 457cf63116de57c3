//! Command implementations for studyctl CLI

pub mod migrate;
pub mod serve;

pub use migrate::{run_check, run_migrate};
pub use serve::run_serve;
