//! Shared configuration, constants and error types for the birthday feed service.

pub mod config;
pub mod constants;
pub mod error;
