//! Zero-based result chunks produced by the data-access layer.
//!
//! [`Page`] carries a total count; [`Slice`] only knows whether a following
//! page exists. Both expose the shared figures through [`Chunk`].

use super::{PageRequest, Sort};
use crate::{FolioError, FolioResult};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Shared view over a zero-based chunk of an ordered result set.
pub trait Chunk {
    /// Element type.
    type Item;

    /// Elements of this chunk, in result order.
    fn content(&self) -> &[Self::Item];

    /// The request this chunk answers.
    fn request(&self) -> &PageRequest;

    /// Whether a following chunk exists.
    fn has_next(&self) -> bool;

    /// Zero-based chunk number.
    fn number(&self) -> u64 {
        self.request().page_index()
    }

    /// Requested chunk size.
    fn size(&self) -> u64 {
        self.request().page_size()
    }

    /// Ordering the content was fetched with.
    fn sort(&self) -> &Sort {
        self.request().sort()
    }

    /// Number of elements actually present.
    fn number_of_elements(&self) -> usize {
        self.content().len()
    }

    /// Whether a preceding chunk exists.
    fn has_previous(&self) -> bool {
        self.number() > 0
    }

    /// Whether this is the first chunk.
    fn is_first(&self) -> bool {
        !self.has_previous()
    }

    /// Whether this is the last chunk.
    fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Whether this chunk holds no elements.
    fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Request for the following chunk, if there is one.
    fn next_request(&self) -> Option<PageRequest> {
        self.has_next().then(|| self.request().next())
    }

    /// Request for the preceding chunk, if there is one.
    fn previous_request(&self) -> Option<PageRequest> {
        self.has_previous().then(|| self.request().previous_or_first())
    }
}

fn check_content_fits(len: usize, request: &PageRequest) -> FolioResult<()> {
    if len as u64 > request.page_size() {
        return Err(FolioError::invalid_argument(format!(
            "Content holds {len} elements but page size is {}",
            request.page_size()
        )));
    }
    Ok(())
}

/// A page of results with a known total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Creates a page from content and an upstream count.
    ///
    /// Fails when the content exceeds the page size or the count is smaller
    /// than the content.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> FolioResult<Self> {
        check_content_fits(content.len(), &request)?;
        if total_elements < content.len() as u64 {
            return Err(FolioError::invalid_argument(format!(
                "Total of {total_elements} elements is smaller than the {} elements on the page",
                content.len()
            )));
        }
        Ok(Self {
            content,
            request,
            total_elements,
        })
    }

    /// Creates a page, running `count` only when the total cannot be derived
    /// from the content itself.
    ///
    /// A short first page is the whole result; a short later page ends at
    /// `offset + len`. Only full pages (or empty later pages) need a count.
    pub fn with_count<F>(content: Vec<T>, request: PageRequest, count: F) -> FolioResult<Self>
    where
        F: FnOnce() -> FolioResult<u64>,
    {
        let len = content.len() as u64;
        let total = if len < request.page_size() && (request.offset() == 0 || len > 0) {
            request.offset().saturating_add(len)
        } else {
            count()?
        };
        Self::new(content, request, total)
    }

    /// Total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.request.page_size())
    }

    /// Maps the content to a different type, preserving order and metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }

    /// Consumes the page, returning its content.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub(crate) fn into_parts(self) -> (Vec<T>, PageRequest, u64) {
        (self.content, self.request, self.total_elements)
    }
}

impl<T> Chunk for Page<T> {
    type Item = T;

    fn content(&self) -> &[T] {
        &self.content
    }

    fn request(&self) -> &PageRequest {
        &self.request
    }

    fn has_next(&self) -> bool {
        self.number() < self.total_pages().saturating_sub(1)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

/// Framework-native JSON shape: zero-based `number`, camelCase keys.
impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Page", 10)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("number", &self.number())?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("totalElements", &self.total_elements)?;
        state.serialize_field("totalPages", &self.total_pages())?;
        state.serialize_field("first", &self.is_first())?;
        state.serialize_field("last", &self.is_last())?;
        state.serialize_field("empty", &Chunk::is_empty(self))?;
        state.serialize_field("numberOfElements", &self.number_of_elements())?;
        state.serialize_field("sort", self.sort())?;
        state.end()
    }
}

/// A chunk of results fetched without a count query.
///
/// Whether a following slice exists is decided by over-fetching one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice<T> {
    content: Vec<T>,
    request: PageRequest,
    has_next: bool,
}

impl<T> Slice<T> {
    /// Creates a slice whose `has_next` flag was already determined upstream.
    pub fn new(content: Vec<T>, request: PageRequest, has_next: bool) -> FolioResult<Self> {
        check_content_fits(content.len(), &request)?;
        Ok(Self {
            content,
            request,
            has_next,
        })
    }

    /// Creates a slice from a probe fetch of up to `page_size + 1` elements.
    ///
    /// If the extra element is present it is dropped and `has_next` is set.
    pub fn from_probe(mut fetched: Vec<T>, request: PageRequest) -> FolioResult<Self> {
        if fetched.len() as u64 > request.probe_limit() {
            return Err(FolioError::invalid_argument(format!(
                "Probe fetched {} elements but at most {} were requested",
                fetched.len(),
                request.probe_limit()
            )));
        }
        let has_next = fetched.len() as u64 > request.page_size();
        if has_next {
            fetched.truncate(fetched.len() - 1);
        }
        Self::new(fetched, request, has_next)
    }

    /// Maps the content to a different type, preserving order and metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Slice<U> {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            has_next: self.has_next,
        }
    }

    /// Consumes the slice, returning its content.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub(crate) fn into_parts(self) -> (Vec<T>, PageRequest, bool) {
        (self.content, self.request, self.has_next)
    }
}

impl<T> Chunk for Slice<T> {
    type Item = T;

    fn content(&self) -> &[T] {
        &self.content
    }

    fn request(&self) -> &PageRequest {
        &self.request
    }

    fn has_next(&self) -> bool {
        self.has_next
    }
}

impl<T> IntoIterator for Slice<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
