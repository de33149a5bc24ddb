//! Shared types and configuration for Vendra.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Configuration management (reporting time zone, runtime settings)

pub mod config;
pub mod types;

pub use config::{AppConfig, ConfigError, DashboardConfig};
