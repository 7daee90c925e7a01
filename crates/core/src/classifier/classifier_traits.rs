//! Classifier repository and service traits.

use async_trait::async_trait;

use super::classifier_model::{Currency, NewCurrency, NewOperationCategory, OperationCategory};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Trait defining the contract for Classifier repository operations.
///
/// Titles are unique within each classifier kind; collisions are
/// `DuplicateTitle`.
#[async_trait]
pub trait ClassifierRepositoryTrait: Send + Sync {
    /// Creates a new currency entry.
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency>;

    /// Lists currencies one page at a time, in creation order.
    fn currencies_page(&self, query: &PageQuery) -> Result<Page<Currency>>;

    /// Creates a new operation category.
    async fn create_category(&self, new_category: NewOperationCategory)
        -> Result<OperationCategory>;

    /// Lists operation categories one page at a time, in creation order.
    fn categories_page(&self, query: &PageQuery) -> Result<Page<OperationCategory>>;
}

/// Trait defining the contract for Classifier service operations.
#[async_trait]
pub trait ClassifierServiceTrait: Send + Sync {
    /// Creates a currency entry. Role enforcement (ADMIN or MANAGER) happens
    /// at the transport layer.
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency>;

    /// Lists currencies one page at a time.
    fn get_currencies_page(&self, query: &PageQuery) -> Result<Page<Currency>>;

    /// Creates an operation category.
    async fn create_category(&self, new_category: NewOperationCategory)
        -> Result<OperationCategory>;

    /// Lists operation categories one page at a time.
    fn get_categories_page(&self, query: &PageQuery) -> Result<Page<OperationCategory>>;
}
