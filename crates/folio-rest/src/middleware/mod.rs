//! HTTP middleware.

mod logging;
mod trace_id;

pub use logging::*;
pub use trace_id::*;

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
