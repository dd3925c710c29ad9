//! Campus records HTTP server library
//!
//! Provides the REST API components so they can be exercised in tests.

pub mod api;
pub mod config;
pub mod error;
