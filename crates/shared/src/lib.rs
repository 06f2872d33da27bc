//! Shared types, errors, and configuration for SchoolFin.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for the integer keys of the reporting schema
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
