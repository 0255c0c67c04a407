//! Conversion from zero-based chunks to one-based display pages.
//!
//! The adapter only renumbers. Totals and first/last/empty flags are taken
//! from the source computation as-is; the upstream count is trusted. Only
//! [`Page`] and [`Slice`] are accepted, so an already adapted
//! [`DisplayPage`] cannot be fed back in and renumbered twice.

use super::{Chunk, DisplayPage, Page, PageRequest, PageableView, Slice};
use crate::{FolioError, FolioResult};

/// Stateless converter from [`Page`] / [`Slice`] to [`DisplayPage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageResultAdapter;

struct Figures {
    first: bool,
    last: bool,
    empty: bool,
    number_of_elements: usize,
    totals: Option<(u64, u64)>,
}

impl PageResultAdapter {
    /// Adapts a counted page.
    pub fn adapt_counted<T>(page: Page<T>) -> FolioResult<DisplayPage<T>> {
        Self::adapt_counted_with(page, std::convert::identity)
    }

    /// Adapts a counted page, transforming each element.
    ///
    /// `transform` runs once per element, in order.
    pub fn adapt_counted_with<T, U, F>(page: Page<T>, transform: F) -> FolioResult<DisplayPage<U>>
    where
        F: FnMut(T) -> U,
    {
        let figures = Figures {
            first: page.is_first(),
            last: page.is_last(),
            empty: Chunk::is_empty(&page),
            number_of_elements: page.number_of_elements(),
            totals: Some((page.total_pages(), page.total_elements())),
        };
        let (content, request, _) = page.into_parts();
        Self::build(content, &request, figures, transform)
    }

    /// Adapts a slice; totals are left unknown.
    pub fn adapt_slice<T>(slice: Slice<T>) -> FolioResult<DisplayPage<T>> {
        Self::adapt_slice_with(slice, std::convert::identity)
    }

    /// Adapts a slice, transforming each element.
    pub fn adapt_slice_with<T, U, F>(slice: Slice<T>, transform: F) -> FolioResult<DisplayPage<U>>
    where
        F: FnMut(T) -> U,
    {
        let figures = Figures {
            first: slice.is_first(),
            last: slice.is_last(),
            empty: Chunk::is_empty(&slice),
            number_of_elements: slice.number_of_elements(),
            totals: None,
        };
        let (content, request, _) = slice.into_parts();
        Self::build(content, &request, figures, transform)
    }

    fn build<T, U, F>(
        content: Vec<T>,
        request: &PageRequest,
        figures: Figures,
        transform: F,
    ) -> FolioResult<DisplayPage<U>>
    where
        F: FnMut(T) -> U,
    {
        // Every `PageRequest` constructor already rejects a zero size, so this
        // only fires if that guarantee is ever loosened.
        if request.page_size() == 0 {
            return Err(FolioError::invalid_argument(
                "Page size must be greater than zero",
            ));
        }
        let page_number = request.page_index().checked_add(1).ok_or_else(|| {
            FolioError::invalid_argument(format!(
                "Page index {} cannot be renumbered",
                request.page_index()
            ))
        })?;

        let sort = request.sort().clone();
        Ok(DisplayPage {
            content: content.into_iter().map(transform).collect(),
            pageable: PageableView {
                sort: sort.clone(),
                offset: request.offset(),
                page_number,
                page_size: request.page_size(),
                paged: true,
                unpaged: false,
            },
            page_number,
            page_size: request.page_size(),
            total_pages: figures.totals.map(|(pages, _)| pages),
            total_elements: figures.totals.map(|(_, elements)| elements),
            first: figures.first,
            last: figures.last,
            empty: figures.empty,
            number_of_elements: figures.number_of_elements,
            sort,
        })
    }
}

impl<T> Page<T> {
    /// Shorthand for [`PageResultAdapter::adapt_counted`].
    pub fn into_display(self) -> FolioResult<DisplayPage<T>> {
        PageResultAdapter::adapt_counted(self)
    }
}

impl<T> Slice<T> {
    /// Shorthand for [`PageResultAdapter::adapt_slice`].
    pub fn into_display(self) -> FolioResult<DisplayPage<T>> {
        PageResultAdapter::adapt_slice(self)
    }
}
