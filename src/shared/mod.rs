//! Shared utilities and error types used across all layers
pub mod error;
pub mod security;

/// Crate-wide result type backed by `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
