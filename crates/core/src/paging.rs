//! Offset pagination: validated requests and the page envelope returned to
//! callers.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::errors::{Error, Result};

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Zero-based page number.
    pub page: i64,
    /// Number of elements per page.
    pub size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Rejects out-of-range parameters before any query runs.
    pub fn validate(&self) -> Result<()> {
        if self.page < DEFAULT_PAGE_NUMBER {
            return Err(Error::InvalidPageParameters(
                "Page number must not be negative".to_string(),
            ));
        }
        if self.size < MIN_PAGE_SIZE || self.size > MAX_PAGE_SIZE {
            return Err(Error::InvalidPageParameters(format!(
                "Page size must be between {} and {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        self.page * self.size
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// One page of results together with the figures callers need to walk the
/// full listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub number: i64,
    pub size: i64,
    pub total_pages: i64,
    pub total_elements: i64,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: i64,
    pub content: Vec<T>,
}

impl<T> Page<T> {
    /// Assembles the envelope for `content` fetched with `query` out of
    /// `total_elements` matching rows.
    pub fn new(content: Vec<T>, query: &PageQuery, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + query.size - 1) / query.size
        };
        Self {
            number: query.page,
            size: query.size,
            total_pages,
            total_elements,
            first: query.page == 0,
            last: query.page + 1 >= total_pages,
            number_of_elements: content.len() as i64,
            content,
        }
    }

    /// Maps the page content while keeping the envelope figures.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            number: self.number,
            size: self.size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            first: self.first,
            last: self.last,
            number_of_elements: self.number_of_elements,
            content: self.content.into_iter().map(f).collect(),
        }
    }
}
