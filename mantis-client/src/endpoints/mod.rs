//! # MantisHub API Endpoints
//!
//! Endpoint implementations grouped by REST resource.

pub mod issues;
