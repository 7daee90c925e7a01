//! Helpers shared across API handlers.

use serde::Deserialize;

use finbook_core::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use finbook_core::paging::PageQuery;

/// Query-string paging parameters, `?page=` and `?size=`.
///
/// Values are taken as-is; the services reject out-of-range ones.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    /// Resolves missing parameters to the defaults.
    pub fn into_query(self) -> PageQuery {
        PageQuery::new(
            self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
