//! Pagination extractor.
//!
//! Reads `page`, `size` and any number of `sort` parameters, e.g.
//! `?page=0&size=3&sort=id,desc&sort=username`.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::Query;
use folio_config::PagingConfig;
use folio_core::{FolioError, FolioResult, PageRequest, Sort};
use serde::Deserialize;

/// Query parameters for pagination.
///
/// Values are signed so that negative input is reported as an invalid
/// argument rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub sort: Vec<String>,
}

impl PaginationQuery {
    /// Resolves the query against the paging defaults.
    ///
    /// Sizes above the configured maximum are clamped to it.
    pub fn into_page_request(self, paging: &PagingConfig) -> FolioResult<PageRequest> {
        let page_index = match (self.page, paging.one_indexed_parameters) {
            (None, _) => 0,
            (Some(page), false) => page,
            (Some(page), true) if page >= 1 => page - 1,
            (Some(page), true) => {
                return Err(FolioError::invalid_argument(format!(
                    "Page number must be at least 1 (got {page})"
                )))
            }
        };

        let page_size = match self.size {
            None => i64::try_from(paging.default_page_size).unwrap_or(i64::MAX),
            Some(size) if size <= 0 => {
                return Err(FolioError::invalid_argument(format!(
                    "Page size must be greater than zero (got {size})"
                )))
            }
            Some(size) => size.min(i64::try_from(paging.max_page_size).unwrap_or(i64::MAX)),
        };

        let sort = Sort::parse_params(&self.sort)?;
        PageRequest::from_signed(page_index, page_size, sort)
    }
}

/// Extracts a zero-based [`PageRequest`] from the query string.
#[derive(Debug, Clone)]
pub struct Pageable(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pageable
where
    PagingConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError(FolioError::invalid_argument(e.to_string())))?;

        let paging = PagingConfig::from_ref(state);
        Ok(Self(query.into_page_request(&paging)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Direction;

    fn query(page: Option<i64>, size: Option<i64>, sort: &[&str]) -> PaginationQuery {
        PaginationQuery {
            page,
            size,
            sort: sort.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_defaults() {
        let request = PaginationQuery::default()
            .into_page_request(&PagingConfig::default())
            .unwrap();
        assert_eq!(request.page_index(), 0);
        assert_eq!(request.page_size(), 20);
        assert!(request.sort().is_unsorted());
    }

    #[test]
    fn test_explicit_values_and_sorts() {
        let request = query(Some(2), Some(3), &["id,desc", "username"])
            .into_page_request(&PagingConfig::default())
            .unwrap();
        assert_eq!(request.page_index(), 2);
        assert_eq!(request.page_size(), 3);
        assert_eq!(request.sort().orders().len(), 2);
        assert_eq!(request.sort().orders()[0].direction, Direction::Desc);
        assert_eq!(request.sort().orders()[1].field, "username");
    }

    #[test]
    fn test_size_clamped_to_max() {
        let paging = PagingConfig {
            max_page_size: 50,
            ..PagingConfig::default()
        };
        let request = query(None, Some(500), &[])
            .into_page_request(&paging)
            .unwrap();
        assert_eq!(request.page_size(), 50);
    }

    #[test]
    fn test_negative_or_zero_rejected() {
        let paging = PagingConfig::default();
        for q in [
            query(Some(-1), None, &[]),
            query(None, Some(0), &[]),
            query(None, Some(-5), &[]),
        ] {
            let err = q.into_page_request(&paging).unwrap_err();
            assert!(matches!(err, FolioError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_one_indexed_parameters() {
        let paging = PagingConfig {
            one_indexed_parameters: true,
            ..PagingConfig::default()
        };
        let request = query(Some(1), Some(5), &[]).into_page_request(&paging).unwrap();
        assert_eq!(request.page_index(), 0);

        let err = query(Some(0), Some(5), &[]).into_page_request(&paging).unwrap_err();
        assert!(matches!(err, FolioError::InvalidArgument(_)));
    }
}
