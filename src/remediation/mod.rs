//! Remediation core: dependency graph, impact scoring and upgrade strategy.
//!
//! Everything in this module is synchronous and free of I/O; graphs and
//! recommendations are owned values that can be produced concurrently for
//! different inputs.

pub mod domain;
pub mod policies;
pub mod services;
