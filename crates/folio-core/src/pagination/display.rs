//! Display-oriented page: one-based numbering, flattened metadata.

use super::Sort;
use serde::Serialize;

/// Client-facing page result.
///
/// Built only by [`PageResultAdapter`](super::PageResultAdapter); there is no
/// public constructor and no mutation after construction. Totals are `None`
/// for slices and omitted from the JSON rather than reported as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPage<T> {
    pub(super) content: Vec<T>,
    pub(super) pageable: PageableView,
    pub(super) page_number: u64,
    pub(super) page_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) total_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) total_elements: Option<u64>,
    pub(super) first: bool,
    pub(super) last: bool,
    pub(super) empty: bool,
    pub(super) number_of_elements: usize,
    pub(super) sort: Sort,
}

impl<T> DisplayPage<T> {
    /// Elements of the page, in result order.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consumes the page, returning its content.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Nested pageable description.
    #[must_use]
    pub const fn pageable(&self) -> &PageableView {
        &self.pageable
    }

    /// One-based page number.
    #[must_use]
    pub const fn page_number(&self) -> u64 {
        self.page_number
    }

    /// Requested page size.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total pages, when the source was counted.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    /// Total elements, when the source was counted.
    #[must_use]
    pub const fn total_elements(&self) -> Option<u64> {
        self.total_elements
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.first
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.last
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    #[must_use]
    pub const fn number_of_elements(&self) -> usize {
        self.number_of_elements
    }

    #[must_use]
    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

/// Nested pageable object, kept for clients that read the framework's
/// `pageable` block. Only `page_number` differs from the source: it is
/// one-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableView {
    pub(super) sort: Sort,
    pub(super) offset: u64,
    pub(super) page_number: u64,
    pub(super) page_size: u64,
    pub(super) paged: bool,
    pub(super) unpaged: bool,
}

impl PageableView {
    /// Offset of the first element in the full result set.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// One-based page number.
    #[must_use]
    pub const fn page_number(&self) -> u64 {
        self.page_number
    }

    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }
}
