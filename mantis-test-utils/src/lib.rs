//! Test utilities shared across the mantis-action workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Unbound local addresses for transport failure tests
//!   ([`unreachable_base_url`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod net;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use net::unreachable_base_url;
