use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use finbook_core::errors::{Error, Result};
use finbook_core::operations::{
    NewOperation, Operation, OperationRepositoryTrait, OperationUpdate,
};
use finbook_core::paging::{Page, PageQuery};
use finbook_core::time::now_millis;
use finbook_core::version::check_version;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{accounts, operations};

use super::balance::recompute_balance;
use super::model::OperationDB;

/// Repository for managing operation data in the database.
///
/// Mutations run on the writer: the scope check, the version check, the
/// write, and the balance recompute commit as one transaction.
pub struct OperationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl OperationRepository {
    /// Creates a new OperationRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Asserts the account is visible under the given scope. Owners see their
/// own accounts; the admin override (`None`) sees any existing account.
/// Either miss reads the same from the outside: the account is not found.
fn check_account_scope(
    conn: &mut SqliteConnection,
    account_id: &str,
    owner_id: Option<&str>,
) -> Result<()> {
    let mut query = accounts::table
        .filter(accounts::id.eq(account_id))
        .select(accounts::id)
        .into_boxed();
    if let Some(owner) = owner_id {
        query = query.filter(accounts::owner_id.eq(owner));
    }

    query
        .first::<String>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::NotFound("Account".to_string()))?;

    Ok(())
}

/// Loads one operation row inside the account, or `NotFound`.
fn find_in_account(
    conn: &mut SqliteConnection,
    account_id: &str,
    operation_id: &str,
) -> Result<OperationDB> {
    operations::table
        .filter(operations::id.eq(operation_id))
        .filter(operations::account_id.eq(account_id))
        .select(OperationDB::as_select())
        .first::<OperationDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::NotFound("Operation".to_string()))
}

// Implement the trait
#[async_trait]
impl OperationRepositoryTrait for OperationRepository {
    async fn create(
        &self,
        account_id: &str,
        owner_id: &str,
        new_operation: NewOperation,
    ) -> Result<Operation> {
        let account_id = account_id.to_string();
        let owner = owner_id.to_string();

        self.writer
            .exec(move |conn| {
                check_account_scope(conn, &account_id, Some(&owner))?;

                let operation_db = OperationDB::from_new(&account_id, new_operation);
                diesel::insert_into(operations::table)
                    .values(&operation_db)
                    .execute(conn)
                    .into_core()?;

                recompute_balance(conn, &account_id, operation_db.created_at)?;

                Ok(operation_db.into())
            })
            .await
    }

    /// Lists an account's operations one page at a time, most recent
    /// operation date first
    fn list_page(
        &self,
        account_id: &str,
        owner_id: Option<&str>,
        query: &PageQuery,
    ) -> Result<Page<Operation>> {
        let mut conn = get_connection(&self.pool)?;

        check_account_scope(&mut conn, account_id, owner_id)?;

        let total_elements = operations::table
            .filter(operations::account_id.eq(account_id))
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let results = operations::table
            .filter(operations::account_id.eq(account_id))
            .select(OperationDB::as_select())
            .order((
                operations::date.desc(),
                operations::created_at.asc(),
                operations::id.asc(),
            ))
            .limit(query.limit())
            .offset(query.offset())
            .load::<OperationDB>(&mut conn)
            .into_core()?;

        let content: Vec<Operation> = results.into_iter().map(Operation::from).collect();
        Ok(Page::new(content, query, total_elements))
    }

    async fn update(
        &self,
        account_id: &str,
        operation_id: &str,
        owner_id: Option<&str>,
        operation_update: OperationUpdate,
        supplied_version: i64,
    ) -> Result<Operation> {
        let account_id = account_id.to_string();
        let operation_id = operation_id.to_string();
        let owner = owner_id.map(str::to_string);

        self.writer
            .exec(move |conn| {
                check_account_scope(conn, &account_id, owner.as_deref())?;

                let existing = find_in_account(conn, &account_id, &operation_id)?;
                check_version(existing.updated_at, supplied_version)?;

                let now = now_millis();
                let affected = diesel::update(
                    operations::table
                        .filter(operations::id.eq(&operation_id))
                        .filter(operations::updated_at.eq(supplied_version)),
                )
                .set((
                    operations::date.eq(operation_update.date),
                    operations::description.eq(&operation_update.description),
                    operations::category_id.eq(&operation_update.category_id),
                    operations::value.eq(operation_update.value.to_string()),
                    operations::currency_id.eq(&operation_update.currency_id),
                    operations::updated_at.eq(now),
                ))
                .execute(conn)
                .into_core()?;

                if affected == 0 {
                    return Err(Error::VersionConflict);
                }

                recompute_balance(conn, &account_id, now)?;

                let mut operation_db = existing;
                operation_db.date = operation_update.date;
                operation_db.description = operation_update.description;
                operation_db.category_id = operation_update.category_id;
                operation_db.value = operation_update.value.to_string();
                operation_db.currency_id = operation_update.currency_id;
                operation_db.updated_at = now;

                Ok(operation_db.into())
            })
            .await
    }

    async fn delete(
        &self,
        account_id: &str,
        operation_id: &str,
        owner_id: Option<&str>,
        supplied_version: i64,
    ) -> Result<()> {
        let account_id = account_id.to_string();
        let operation_id = operation_id.to_string();
        let owner = owner_id.map(str::to_string);

        self.writer
            .exec(move |conn| {
                check_account_scope(conn, &account_id, owner.as_deref())?;

                let existing = find_in_account(conn, &account_id, &operation_id)?;
                check_version(existing.updated_at, supplied_version)?;

                let affected = diesel::delete(
                    operations::table
                        .filter(operations::id.eq(&operation_id))
                        .filter(operations::updated_at.eq(supplied_version)),
                )
                .execute(conn)
                .into_core()?;

                if affected == 0 {
                    return Err(Error::VersionConflict);
                }

                recompute_balance(conn, &account_id, now_millis())?;

                Ok(())
            })
            .await
    }
}
