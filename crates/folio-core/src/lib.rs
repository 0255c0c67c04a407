//! # Folio Core
//!
//! Paging model, the page result adapter, audit metadata, domain entities
//! and error definitions shared by every Folio layer.

pub mod audit;
pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use audit::*;
pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::{init_logging, LogFormat, LoggingConfig};
pub use traits::*;
pub use validation::*;
