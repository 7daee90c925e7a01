//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Trait defining the contract for Account repository operations.
///
/// Every operation is scoped to an owner: an account that exists but belongs
/// to someone else is reported as not found. Implementations handle
/// transaction management internally.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account for `owner_id` with a zero balance.
    ///
    /// Fails with `DuplicateTitle` when the owner already has an account
    /// with the same title.
    async fn create(&self, owner_id: &str, new_account: NewAccount) -> Result<Account>;

    /// Updates an account's descriptive fields.
    ///
    /// The write only happens when `supplied_version` matches the stored
    /// version token. The balance is never touched by this path.
    async fn update(
        &self,
        account_id: &str,
        owner_id: &str,
        account_update: AccountUpdate,
        supplied_version: i64,
    ) -> Result<Account>;

    /// Retrieves one account owned by `owner_id`.
    fn get_by_id(&self, account_id: &str, owner_id: &str) -> Result<Account>;

    /// Lists the owner's accounts one page at a time, in creation order.
    fn list_page(&self, owner_id: &str, query: &PageQuery) -> Result<Page<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles input validation and delegates persistence to
/// the repository.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account for the calling user.
    async fn create_account(&self, owner_id: &str, new_account: NewAccount) -> Result<Account>;

    /// Updates an account of the calling user, guarded by its version token.
    async fn update_account(
        &self,
        account_id: &str,
        owner_id: &str,
        account_update: AccountUpdate,
        supplied_version: i64,
    ) -> Result<Account>;

    /// Retrieves one account of the calling user.
    fn get_account(&self, account_id: &str, owner_id: &str) -> Result<Account>;

    /// Lists the calling user's accounts one page at a time.
    fn get_accounts_page(&self, owner_id: &str, query: &PageQuery) -> Result<Page<Account>>;
}
