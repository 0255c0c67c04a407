//! Cutting pages and slices out of ordered rows.

use folio_core::{FolioResult, Page, PageRequest, Slice};

fn window<T>(rows: Vec<T>, offset: u64, limit: u64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    rows.into_iter().skip(offset).take(limit).collect()
}

/// Returns the page `request` selects from `rows`.
///
/// `rows` must already be filtered and ordered. The count runs only when
/// the window alone cannot tell the total.
pub fn page_of<T>(rows: Vec<T>, request: &PageRequest) -> FolioResult<Page<T>> {
    let total = rows.len() as u64;
    let content = window(rows, request.offset(), request.limit());
    Page::with_count(content, request.clone(), || Ok(total))
}

/// Returns the slice `request` selects from `rows`, probing one row past
/// the page to decide whether another slice follows.
pub fn slice_of<T>(rows: Vec<T>, request: &PageRequest) -> FolioResult<Slice<T>> {
    let fetched = window(rows, request.offset(), request.probe_limit());
    Slice::from_probe(fetched, request.clone())
}
