//! # Folio REST
//!
//! REST API layer using Axum for Folio.
//! Provides member endpoints in both the framework-native zero-based page
//! shape and the one-based display shape, plus health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
