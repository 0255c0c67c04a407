//! Pagination types for list operations.
//!
//! The data-access layer answers a [`PageRequest`] with a zero-based [`Page`]
//! (counted) or [`Slice`] (probed). [`PageResultAdapter`] turns either into a
//! one-based [`DisplayPage`] for clients.

mod adapter;
mod chunk;
mod display;
mod request;
mod sort;

pub use adapter::PageResultAdapter;
pub use chunk::{Chunk, Page, Slice};
pub use display::{DisplayPage, PageableView};
pub use request::PageRequest;
pub use sort::{Direction, Order, Sort};
