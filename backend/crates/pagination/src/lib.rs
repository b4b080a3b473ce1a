//! Page request primitives shared by marketplace listing endpoints.
//!
//! Listing endpoints accept a 1-indexed `page` and a `limit`, both optional
//! on the wire. This crate owns the defaults, rejects zero values, and renders
//! the pair back into a query string when a request is forwarded to the
//! remote authority. Ordering and total-count semantics stay with whichever
//! service produces the [`Page`].

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Page number used when the caller omits `page`.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller omits `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

const PAGE_KEY: &str = "page";
const LIMIT_KEY: &str = "limit";

/// Errors raised while building a [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// Pages are 1-indexed, so zero is never valid.
    #[error("page must be at least 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("limit must be at least 1")]
    ZeroLimit,
    /// A query parameter was not an unsigned integer.
    #[error("{field} must be a positive integer, got {value:?}")]
    InvalidNumber {
        /// Query parameter name.
        field: &'static str,
        /// Raw value supplied by the caller.
        value: String,
    },
}

impl PaginationError {
    /// Query parameter the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ZeroPage => PAGE_KEY,
            Self::ZeroLimit => LIMIT_KEY,
            Self::InvalidNumber { field, .. } => *field,
        }
    }
}

/// A validated 1-indexed page request.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::from_parts(None, Some(25))?;
/// assert_eq!(request.page(), 1);
/// assert_eq!(request.limit(), 25);
/// # Ok::<(), pagination::PaginationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: NonZeroU32,
    limit: NonZeroU32,
}

impl PageRequest {
    /// Build a request from explicit values.
    ///
    /// # Errors
    /// Returns [`PaginationError::ZeroPage`] or [`PaginationError::ZeroLimit`]
    /// when either value is zero.
    pub fn new(page: u32, limit: u32) -> Result<Self, PaginationError> {
        let page_number = NonZeroU32::new(page).ok_or(PaginationError::ZeroPage)?;
        let page_size = NonZeroU32::new(limit).ok_or(PaginationError::ZeroLimit)?;
        Ok(Self {
            page: page_number,
            limit: page_size,
        })
    }

    /// Build a request from optional values, applying the defaults.
    ///
    /// # Errors
    /// Returns an error when a supplied value is zero.
    pub fn from_parts(page: Option<u32>, limit: Option<u32>) -> Result<Self, PaginationError> {
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }

    /// Parse `page` and `limit` out of a raw query string.
    ///
    /// Unrelated parameters are ignored. When a key repeats, the last value
    /// wins.
    ///
    /// # Errors
    /// Returns [`PaginationError::InvalidNumber`] when a value is not an
    /// unsigned integer, or a zero-value error as for [`PageRequest::new`].
    pub fn from_query(query: &str) -> Result<Self, PaginationError> {
        let mut page = None;
        let mut limit = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PAGE_KEY => page = Some(parse_number(PAGE_KEY, &value)?),
                LIMIT_KEY => limit = Some(parse_number(LIMIT_KEY, &value)?),
                _ => {}
            }
        }
        Self::from_parts(page, limit)
    }

    /// 1-indexed page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page.get()
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit.get()
    }

    /// Render the request as `(key, value)` query pairs.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            (PAGE_KEY, self.page.to_string()),
            (LIMIT_KEY, self.limit.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: NonZeroU32::MIN,
            limit: NonZeroU32::new(DEFAULT_LIMIT).unwrap_or(NonZeroU32::MIN),
        }
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<u32, PaginationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| PaginationError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}

/// One page of items produced by a listing source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_pages: Option<u32>,
}

impl<T> Page<T> {
    /// Wrap `items` as the answer to `request`.
    #[must_use]
    pub const fn new(items: Vec<T>, request: PageRequest) -> Self {
        Self {
            items,
            page: request.page(),
            limit: request.limit(),
            total: None,
            total_pages: None,
        }
    }

    /// Attach the totals reported by the listing source.
    #[must_use]
    pub fn with_totals(mut self, total: Option<u64>, total_pages: Option<u32>) -> Self {
        self.total = total;
        self.total_pages = total_pages;
        self
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Page number this page answers.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Page size this page was requested with.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Total item count, when the source reports one.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Total page count, when the source reports one.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }
}
