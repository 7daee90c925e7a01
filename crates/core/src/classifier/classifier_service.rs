use log::debug;
use std::sync::Arc;

use super::classifier_model::{Currency, NewCurrency, NewOperationCategory, OperationCategory};
use super::classifier_traits::{ClassifierRepositoryTrait, ClassifierServiceTrait};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Service for managing the classifier vocabulary.
pub struct ClassifierService {
    repository: Arc<dyn ClassifierRepositoryTrait>,
}

impl ClassifierService {
    /// Creates a new ClassifierService instance
    pub fn new(repository: Arc<dyn ClassifierRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ClassifierServiceTrait for ClassifierService {
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        new_currency.validate()?;
        debug!("Creating currency '{}'", new_currency.title);
        self.repository.create_currency(new_currency).await
    }

    fn get_currencies_page(&self, query: &PageQuery) -> Result<Page<Currency>> {
        query.validate()?;
        self.repository.currencies_page(query)
    }

    async fn create_category(
        &self,
        new_category: NewOperationCategory,
    ) -> Result<OperationCategory> {
        new_category.validate()?;
        debug!("Creating operation category '{}'", new_category.title);
        self.repository.create_category(new_category).await
    }

    fn get_categories_page(&self, query: &PageQuery) -> Result<Page<OperationCategory>> {
        query.validate()?;
        self.repository.categories_page(query)
    }
}
