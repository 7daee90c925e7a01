use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use finbook_core::accounts::{Account, AccountRepositoryTrait, AccountUpdate, NewAccount};
use finbook_core::errors::{Error, Result};
use finbook_core::paging::{Page, PageQuery};
use finbook_core::time::now_millis;
use finbook_core::version::check_version;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accounts;

use super::model::AccountDB;

/// Repository for managing account data in the database.
///
/// All methods take the owner id alongside the account id: an account that
/// exists under a different owner is reported as not found.
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Loads the account row owned by `owner_id`, or `NotFound`.
fn find_owned(
    conn: &mut SqliteConnection,
    account_id: &str,
    owner_id: &str,
) -> Result<AccountDB> {
    accounts::table
        .filter(accounts::id.eq(account_id))
        .filter(accounts::owner_id.eq(owner_id))
        .select(AccountDB::as_select())
        .first::<AccountDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::NotFound("Account".to_string()))
}

/// Checks whether `owner_id` already has another account with this title.
fn title_taken(
    conn: &mut SqliteConnection,
    owner_id: &str,
    title: &str,
    excluded_id: Option<&str>,
) -> Result<bool> {
    let mut query = accounts::table
        .filter(accounts::owner_id.eq(owner_id))
        .filter(accounts::title.eq(title))
        .select(accounts::id)
        .into_boxed();
    if let Some(excluded) = excluded_id {
        query = query.filter(accounts::id.ne(excluded));
    }
    Ok(query
        .first::<String>(conn)
        .optional()
        .into_core()?
        .is_some())
}

// Implement the trait
#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, owner_id: &str, new_account: NewAccount) -> Result<Account> {
        let owner = owner_id.to_string();

        self.writer
            .exec(move |conn| {
                if title_taken(conn, &owner, &new_account.title, None)? {
                    return Err(Error::DuplicateTitle(new_account.title));
                }

                let account_db = AccountDB::from_new(&owner, new_account);
                diesel::insert_into(accounts::table)
                    .values(&account_db)
                    .execute(conn)
                    .into_core()?;

                Ok(account_db.into())
            })
            .await
    }

    async fn update(
        &self,
        account_id: &str,
        owner_id: &str,
        account_update: AccountUpdate,
        supplied_version: i64,
    ) -> Result<Account> {
        let account_id = account_id.to_string();
        let owner = owner_id.to_string();

        self.writer
            .exec(move |conn| {
                let existing = find_owned(conn, &account_id, &owner)?;
                check_version(existing.updated_at, supplied_version)?;

                if account_update.title != existing.title
                    && title_taken(conn, &owner, &account_update.title, Some(&account_id))?
                {
                    return Err(Error::DuplicateTitle(account_update.title));
                }

                // The balance column stays out of the change set; only the
                // recalculator writes it.
                let now = now_millis();
                let affected = diesel::update(
                    accounts::table
                        .filter(accounts::id.eq(&account_id))
                        .filter(accounts::updated_at.eq(supplied_version)),
                )
                .set((
                    accounts::title.eq(&account_update.title),
                    accounts::description.eq(&account_update.description),
                    accounts::account_type.eq(account_update.account_type.as_str()),
                    accounts::currency_id.eq(&account_update.currency_id),
                    accounts::updated_at.eq(now),
                ))
                .execute(conn)
                .into_core()?;

                if affected == 0 {
                    return Err(Error::VersionConflict);
                }

                let mut account_db = existing;
                account_db.title = account_update.title;
                account_db.description = account_update.description;
                account_db.account_type = account_update.account_type.as_str().to_string();
                account_db.currency_id = account_update.currency_id;
                account_db.updated_at = now;

                Ok(account_db.into())
            })
            .await
    }

    /// Retrieves an account by its ID, scoped to the owner
    fn get_by_id(&self, account_id: &str, owner_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let account = find_owned(&mut conn, account_id, owner_id)?;

        Ok(account.into())
    }

    /// Lists the owner's accounts one page at a time, oldest first
    fn list_page(&self, owner_id: &str, query: &PageQuery) -> Result<Page<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let total_elements = accounts::table
            .filter(accounts::owner_id.eq(owner_id))
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let results = accounts::table
            .filter(accounts::owner_id.eq(owner_id))
            .select(AccountDB::as_select())
            .order((accounts::created_at.asc(), accounts::id.asc()))
            .limit(query.limit())
            .offset(query.offset())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        let content: Vec<Account> = results.into_iter().map(Account::from).collect();
        Ok(Page::new(content, query, total_elements))
    }
}
