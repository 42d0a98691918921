//! CI Health Server library.
//!
//! This library provides the core functionality for the branch-health
//! server: the aggregation engine that reduces raw per-run CI results
//! into ranked job, platform, and component statistics, plus the
//! database queries and API services that expose them.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
