//! # Folio Service
//!
//! Member use cases. Repositories hand back zero-based pages of entities;
//! this layer maps them to DTOs and, for display endpoints, renumbers them
//! through [`PageResultAdapter`](folio_core::PageResultAdapter).

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod member_service;

pub use dto::*;
pub use member_service::*;
pub use r#impl::MemberServiceImpl;
