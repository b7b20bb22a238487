//! # Middleware
//!
//! Tower middleware applied to the API router.

pub mod metrics;
