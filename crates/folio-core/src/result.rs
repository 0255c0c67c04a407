//! Result type aliases for Folio.

use crate::FolioError;

/// A specialized `Result` type for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;
