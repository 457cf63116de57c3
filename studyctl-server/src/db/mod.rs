//! Database layer - connection pool, schema, repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Parameterized single-statement queries, autocommit
//! - Schema created once at startup with CREATE TABLE IF NOT EXISTS

pub mod migrations;
pub mod pool;
pub mod repos;

pub use migrations::initialize_schema;
pub use pool::{create_pool, server_version, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
