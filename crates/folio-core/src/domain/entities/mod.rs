//! Domain entities.

mod item;
mod member;
mod team;

pub use item::*;
pub use member::*;
pub use team::*;
