use log::debug;
use std::sync::Arc;

use super::operations_model::{NewOperation, Operation, OperationUpdate};
use super::operations_traits::{OperationRepositoryTrait, OperationServiceTrait};
use crate::audit::{record_best_effort, AuditSinkTrait, EssenceType, NewAuditRecord};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Service for managing money operations, including the admin override
/// paths that work across all users' accounts.
pub struct OperationService {
    repository: Arc<dyn OperationRepositoryTrait>,
    audit_sink: Arc<dyn AuditSinkTrait>,
}

impl OperationService {
    /// Creates a new OperationService instance
    pub fn new(
        repository: Arc<dyn OperationRepositoryTrait>,
        audit_sink: Arc<dyn AuditSinkTrait>,
    ) -> Self {
        Self {
            repository,
            audit_sink,
        }
    }
}

#[async_trait::async_trait]
impl OperationServiceTrait for OperationService {
    async fn create_operation(
        &self,
        account_id: &str,
        caller_id: &str,
        new_operation: NewOperation,
    ) -> Result<Operation> {
        new_operation.validate()?;
        debug!("Creating operation in account {}", account_id);
        self.repository
            .create(account_id, caller_id, new_operation)
            .await
    }

    fn get_operations_page(
        &self,
        account_id: &str,
        caller_id: &str,
        query: &PageQuery,
    ) -> Result<Page<Operation>> {
        query.validate()?;
        self.repository
            .list_page(account_id, Some(caller_id), query)
    }

    async fn update_operation(
        &self,
        account_id: &str,
        operation_id: &str,
        caller_id: &str,
        operation_update: OperationUpdate,
        supplied_version: i64,
    ) -> Result<Operation> {
        operation_update.validate()?;
        debug!("Updating operation {}", operation_id);
        self.repository
            .update(
                account_id,
                operation_id,
                Some(caller_id),
                operation_update,
                supplied_version,
            )
            .await
    }

    async fn delete_operation(
        &self,
        account_id: &str,
        operation_id: &str,
        caller_id: &str,
        supplied_version: i64,
    ) -> Result<()> {
        debug!("Deleting operation {}", operation_id);
        self.repository
            .delete(
                account_id,
                operation_id,
                Some(caller_id),
                supplied_version,
            )
            .await
    }

    fn get_operations_page_by_admin(
        &self,
        account_id: &str,
        query: &PageQuery,
    ) -> Result<Page<Operation>> {
        query.validate()?;
        self.repository.list_page(account_id, None, query)
    }

    async fn update_operation_by_admin(
        &self,
        admin_id: &str,
        account_id: &str,
        operation_id: &str,
        operation_update: OperationUpdate,
        supplied_version: i64,
    ) -> Result<Operation> {
        operation_update.validate()?;
        debug!("Admin {} updating operation {}", admin_id, operation_id);
        let operation = self
            .repository
            .update(
                account_id,
                operation_id,
                None,
                operation_update,
                supplied_version,
            )
            .await?;
        record_best_effort(
            self.audit_sink.as_ref(),
            NewAuditRecord::new(
                admin_id,
                format!("Admin updated operation in account {}", account_id),
                EssenceType::Operation,
                operation_id,
            ),
        )
        .await;
        Ok(operation)
    }

    async fn delete_operation_by_admin(
        &self,
        admin_id: &str,
        account_id: &str,
        operation_id: &str,
        supplied_version: i64,
    ) -> Result<()> {
        debug!("Admin {} deleting operation {}", admin_id, operation_id);
        self.repository
            .delete(account_id, operation_id, None, supplied_version)
            .await?;
        record_best_effort(
            self.audit_sink.as_ref(),
            NewAuditRecord::new(
                admin_id,
                format!("Admin deleted operation from account {}", account_id),
                EssenceType::Operation,
                operation_id,
            ),
        )
        .await;
        Ok(())
    }
}
