use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use finbook_core::classifier::{
    ClassifierRepositoryTrait, Currency, NewCurrency, NewOperationCategory, OperationCategory,
};
use finbook_core::errors::{Error, Result};
use finbook_core::paging::{Page, PageQuery};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{currencies, operation_categories};

use super::model::{CurrencyDB, OperationCategoryDB};

/// Repository for the classifier vocabularies (currencies and operation
/// categories). Entries are create-and-list only; titles are unique within
/// each kind.
pub struct ClassifierRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ClassifierRepository {
    /// Creates a new ClassifierRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

// Implement the trait
#[async_trait]
impl ClassifierRepositoryTrait for ClassifierRepository {
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        self.writer
            .exec(move |conn| {
                let taken = currencies::table
                    .filter(currencies::title.eq(&new_currency.title))
                    .select(currencies::id)
                    .first::<String>(conn)
                    .optional()
                    .into_core()?
                    .is_some();
                if taken {
                    return Err(Error::DuplicateTitle(new_currency.title));
                }

                let currency_db = CurrencyDB::from_new(new_currency);
                diesel::insert_into(currencies::table)
                    .values(&currency_db)
                    .execute(conn)
                    .into_core()?;

                Ok(currency_db.into())
            })
            .await
    }

    /// Lists currencies one page at a time, oldest first
    fn currencies_page(&self, query: &PageQuery) -> Result<Page<Currency>> {
        let mut conn = get_connection(&self.pool)?;

        let total_elements = currencies::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let results = currencies::table
            .select(CurrencyDB::as_select())
            .order((currencies::created_at.asc(), currencies::id.asc()))
            .limit(query.limit())
            .offset(query.offset())
            .load::<CurrencyDB>(&mut conn)
            .into_core()?;

        let content: Vec<Currency> = results.into_iter().map(Currency::from).collect();
        Ok(Page::new(content, query, total_elements))
    }

    async fn create_category(
        &self,
        new_category: NewOperationCategory,
    ) -> Result<OperationCategory> {
        self.writer
            .exec(move |conn| {
                let taken = operation_categories::table
                    .filter(operation_categories::title.eq(&new_category.title))
                    .select(operation_categories::id)
                    .first::<String>(conn)
                    .optional()
                    .into_core()?
                    .is_some();
                if taken {
                    return Err(Error::DuplicateTitle(new_category.title));
                }

                let category_db = OperationCategoryDB::from_new(new_category);
                diesel::insert_into(operation_categories::table)
                    .values(&category_db)
                    .execute(conn)
                    .into_core()?;

                Ok(category_db.into())
            })
            .await
    }

    /// Lists operation categories one page at a time, oldest first
    fn categories_page(&self, query: &PageQuery) -> Result<Page<OperationCategory>> {
        let mut conn = get_connection(&self.pool)?;

        let total_elements = operation_categories::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let results = operation_categories::table
            .select(OperationCategoryDB::as_select())
            .order((
                operation_categories::created_at.asc(),
                operation_categories::id.asc(),
            ))
            .limit(query.limit())
            .offset(query.offset())
            .load::<OperationCategoryDB>(&mut conn)
            .into_core()?;

        let content: Vec<OperationCategory> = results
            .into_iter()
            .map(OperationCategory::from)
            .collect();
        Ok(Page::new(content, query, total_elements))
    }
}
