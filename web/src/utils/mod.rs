pub mod auth;
pub mod format;
pub mod query;
pub mod schedule;
pub mod stats;
pub mod storage;
