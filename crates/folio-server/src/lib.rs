//! # Folio Server Library
//!
//! Wiring and startup utilities for the Folio server.

pub mod app;
pub mod startup;
