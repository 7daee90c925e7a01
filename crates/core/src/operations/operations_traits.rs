//! Operation repository and service traits.
//!
//! These traits define the contract for operation handling without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::operations_model::{NewOperation, Operation, OperationUpdate};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Trait defining the contract for Operation repository operations.
///
/// Accounts are resolved under a scope: `owner_id: Some(..)` requires the
/// account to belong to that owner, `None` (the admin override) only
/// requires it to exist. Either miss is `NotFound`. Every mutation runs its
/// checks, the write, and the balance recompute in one transaction.
#[async_trait]
pub trait OperationRepositoryTrait: Send + Sync {
    /// Creates a new operation in an account owned by `owner_id`, then
    /// recomputes the account balance.
    async fn create(
        &self,
        account_id: &str,
        owner_id: &str,
        new_operation: NewOperation,
    ) -> Result<Operation>;

    /// Lists an account's operations one page at a time, most recent
    /// operation date first.
    fn list_page(
        &self,
        account_id: &str,
        owner_id: Option<&str>,
        query: &PageQuery,
    ) -> Result<Page<Operation>>;

    /// Replaces an operation's fields, guarded by its version token, then
    /// recomputes the account balance.
    ///
    /// The checks run in order: account in scope, operation in account,
    /// version match.
    async fn update(
        &self,
        account_id: &str,
        operation_id: &str,
        owner_id: Option<&str>,
        operation_update: OperationUpdate,
        supplied_version: i64,
    ) -> Result<Operation>;

    /// Deletes an operation, guarded by its version token, then recomputes
    /// the account balance. Same check order as `update`.
    async fn delete(
        &self,
        account_id: &str,
        operation_id: &str,
        owner_id: Option<&str>,
        supplied_version: i64,
    ) -> Result<()>;
}

/// Trait defining the contract for Operation service operations.
///
/// The `*_by_admin` methods skip the ownership requirement and append an
/// audit record after the mutation succeeds.
#[async_trait]
pub trait OperationServiceTrait: Send + Sync {
    /// Creates an operation in one of the caller's accounts.
    async fn create_operation(
        &self,
        account_id: &str,
        caller_id: &str,
        new_operation: NewOperation,
    ) -> Result<Operation>;

    /// Lists operations of one of the caller's accounts.
    fn get_operations_page(
        &self,
        account_id: &str,
        caller_id: &str,
        query: &PageQuery,
    ) -> Result<Page<Operation>>;

    /// Updates an operation in one of the caller's accounts.
    async fn update_operation(
        &self,
        account_id: &str,
        operation_id: &str,
        caller_id: &str,
        operation_update: OperationUpdate,
        supplied_version: i64,
    ) -> Result<Operation>;

    /// Deletes an operation from one of the caller's accounts.
    async fn delete_operation(
        &self,
        account_id: &str,
        operation_id: &str,
        caller_id: &str,
        supplied_version: i64,
    ) -> Result<()>;

    /// Lists any account's operations, regardless of owner.
    fn get_operations_page_by_admin(
        &self,
        account_id: &str,
        query: &PageQuery,
    ) -> Result<Page<Operation>>;

    /// Updates an operation in any account; audited.
    async fn update_operation_by_admin(
        &self,
        admin_id: &str,
        account_id: &str,
        operation_id: &str,
        operation_update: OperationUpdate,
        supplied_version: i64,
    ) -> Result<Operation>;

    /// Deletes an operation from any account; audited.
    async fn delete_operation_by_admin(
        &self,
        admin_id: &str,
        account_id: &str,
        operation_id: &str,
        supplied_version: i64,
    ) -> Result<()>;
}
