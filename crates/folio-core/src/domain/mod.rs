//! Domain layer: entities persisted by the data-access layer.

pub mod entities;

pub use entities::*;
