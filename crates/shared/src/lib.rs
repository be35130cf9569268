//! Shared types, errors, and configuration for Quanta.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and rounding modes
//! - Typed IDs for type-safe entity references
//! - The boundary error type handed to calling services
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogConfig, PrecisionConfig};
pub use error::{AppError, AppResult};
