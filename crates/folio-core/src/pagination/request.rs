//! Page request: which zero-based page of which size, in which order.

use super::Sort;
use crate::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};

/// A request for one page of an ordered result set.
///
/// Pages are zero-based at this layer. A request can only be built through the
/// checked constructors, so `page_size` is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    page_index: u64,
    page_size: u64,
    #[serde(default)]
    sort: Sort,
}

#[derive(Deserialize)]
struct RawPageRequest {
    page_index: u64,
    page_size: u64,
    #[serde(default)]
    sort: Sort,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = FolioError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::of(raw.page_index, raw.page_size, raw.sort)
    }
}

impl PageRequest {
    /// The page size used when a caller does not ask for one.
    pub const DEFAULT_SIZE: u64 = 20;

    /// Creates a request for `page_index` (zero-based) of `page_size` elements.
    pub fn of(page_index: u64, page_size: u64, sort: Sort) -> FolioResult<Self> {
        if page_size == 0 {
            return Err(FolioError::invalid_argument(
                "Page size must be greater than zero",
            ));
        }
        Ok(Self {
            page_index,
            page_size,
            sort,
        })
    }

    /// Creates an unsorted request.
    pub fn of_size(page_index: u64, page_size: u64) -> FolioResult<Self> {
        Self::of(page_index, page_size, Sort::unsorted())
    }

    /// Creates a request from signed values, as parsed from untrusted input.
    pub fn from_signed(page_index: i64, page_size: i64, sort: Sort) -> FolioResult<Self> {
        let page_index = u64::try_from(page_index).map_err(|_| {
            FolioError::invalid_argument(format!(
                "Page index must not be negative (got {page_index})"
            ))
        })?;
        let page_size = u64::try_from(page_size).map_err(|_| {
            FolioError::invalid_argument(format!(
                "Page size must be greater than zero (got {page_size})"
            ))
        })?;
        Self::of(page_index, page_size, sort)
    }

    /// The first page with the default size.
    #[must_use]
    pub fn first_with_default_size() -> Self {
        Self {
            page_index: 0,
            page_size: Self::DEFAULT_SIZE,
            sort: Sort::unsorted(),
        }
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Number of elements per page.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Requested ordering.
    #[must_use]
    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Offset of the first element of this page in the full result set.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Maximum number of elements to fetch for this page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.page_size
    }

    /// Number of elements to fetch when probing for a following page.
    #[must_use]
    pub const fn probe_limit(&self) -> u64 {
        self.page_size.saturating_add(1)
    }

    /// Returns true when this is the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page_index == 0
    }

    /// The request for the following page.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            page_index: self.page_index.saturating_add(1),
            ..self.clone()
        }
    }

    /// The request for the preceding page, or this one when already first.
    #[must_use]
    pub fn previous_or_first(&self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..self.clone()
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first_with_default_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_offset_and_limit() {
        let req = PageRequest::of_size(2, 10).unwrap();
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
        assert_eq!(req.probe_limit(), 11);
    }

    #[test]
    fn test_zero_size_is_invalid_argument() {
        let err = PageRequest::of_size(0, 0).unwrap_err();
        assert!(matches!(err, FolioError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_signed_rejects_negatives() {
        assert!(matches!(
            PageRequest::from_signed(-1, 10, Sort::unsorted()),
            Err(FolioError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::from_signed(0, -5, Sort::unsorted()),
            Err(FolioError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::from_signed(0, 0, Sort::unsorted()),
            Err(FolioError::InvalidArgument(_))
        ));
        let ok = PageRequest::from_signed(3, 5, Sort::unsorted()).unwrap();
        assert_eq!(ok.page_index(), 3);
        assert_eq!(ok.page_size(), 5);
    }

    #[test]
    fn test_navigation() {
        let req = PageRequest::of(1, 3, Sort::by(Direction::Desc, ["username"])).unwrap();
        assert_eq!(req.next().page_index(), 2);
        assert_eq!(req.previous_or_first().page_index(), 0);
        assert_eq!(req.previous_or_first().previous_or_first().page_index(), 0);
        assert_eq!(req.next().sort(), req.sort());
        assert!(!req.is_first());
        assert!(req.previous_or_first().is_first());
    }

    #[test]
    fn test_default_request() {
        let req = PageRequest::default();
        assert_eq!(req.page_index(), 0);
        assert_eq!(req.page_size(), PageRequest::DEFAULT_SIZE);
        assert!(req.sort().is_unsorted());
    }

    #[test]
    fn test_deserialize_validates_size() {
        let ok: PageRequest =
            serde_json::from_str(r#"{"page_index":1,"page_size":3}"#).unwrap();
        assert_eq!(ok.offset(), 3);
        let bad = serde_json::from_str::<PageRequest>(r#"{"page_index":1,"page_size":0}"#);
        assert!(bad.is_err());
    }
}
