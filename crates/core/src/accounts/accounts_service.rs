use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Service for managing money accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, owner_id: &str, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!("Creating account '{}' for {}", new_account.title, owner_id);
        self.repository.create(owner_id, new_account).await
    }

    async fn update_account(
        &self,
        account_id: &str,
        owner_id: &str,
        account_update: AccountUpdate,
        supplied_version: i64,
    ) -> Result<Account> {
        account_update.validate()?;
        debug!("Updating account {} for {}", account_id, owner_id);
        self.repository
            .update(account_id, owner_id, account_update, supplied_version)
            .await
    }

    fn get_account(&self, account_id: &str, owner_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id, owner_id)
    }

    fn get_accounts_page(&self, owner_id: &str, query: &PageQuery) -> Result<Page<Account>> {
        query.validate()?;
        self.repository.list_page(owner_id, query)
    }
}
