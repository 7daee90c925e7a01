use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use finbook_core::errors::{Error, Result};
use finbook_core::paging::{Page, PageQuery};
use finbook_core::time::now_millis;
use finbook_core::users::{NewUser, User, UserRepositoryTrait, UserUpdate};
use finbook_core::version::check_version;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;

use super::model::UserDB;

/// Repository for managing user data in the database
pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    /// Creates a new UserRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Loads the user row, or `NotFound`.
fn find_user(conn: &mut SqliteConnection, user_id: &str) -> Result<UserDB> {
    users::table
        .filter(users::id.eq(user_id))
        .select(UserDB::as_select())
        .first::<UserDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::NotFound("User".to_string()))
}

/// Checks whether another user already holds this mail address.
fn mail_taken(
    conn: &mut SqliteConnection,
    mail: &str,
    excluded_id: Option<&str>,
) -> Result<bool> {
    let mut query = users::table
        .filter(users::mail.eq(mail))
        .select(users::id)
        .into_boxed();
    if let Some(excluded) = excluded_id {
        query = query.filter(users::id.ne(excluded));
    }
    Ok(query
        .first::<String>(conn)
        .optional()
        .into_core()?
        .is_some())
}

// Implement the trait
#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn| {
                if mail_taken(conn, &new_user.mail, None)? {
                    return Err(Error::DuplicateMail(new_user.mail));
                }

                let user_db = UserDB::from_new(new_user);
                diesel::insert_into(users::table)
                    .values(&user_db)
                    .execute(conn)
                    .into_core()?;

                Ok(user_db.into())
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        user_update: UserUpdate,
        supplied_version: i64,
    ) -> Result<User> {
        let user_id = user_id.to_string();

        self.writer
            .exec(move |conn| {
                let existing = find_user(conn, &user_id)?;
                check_version(existing.updated_at, supplied_version)?;

                if user_update.mail != existing.mail
                    && mail_taken(conn, &user_update.mail, Some(&user_id))?
                {
                    return Err(Error::DuplicateMail(user_update.mail));
                }

                let now = now_millis();
                let affected = diesel::update(
                    users::table
                        .filter(users::id.eq(&user_id))
                        .filter(users::updated_at.eq(supplied_version)),
                )
                .set((
                    users::mail.eq(&user_update.mail),
                    users::full_name.eq(&user_update.full_name),
                    users::role.eq(user_update.role.as_str()),
                    users::status.eq(user_update.status.as_str()),
                    users::updated_at.eq(now),
                ))
                .execute(conn)
                .into_core()?;

                if affected == 0 {
                    return Err(Error::VersionConflict);
                }

                let mut user_db = existing;
                user_db.mail = user_update.mail;
                user_db.full_name = user_update.full_name;
                user_db.role = user_update.role.as_str().to_string();
                user_db.status = user_update.status.as_str().to_string();
                user_db.updated_at = now;

                Ok(user_db.into())
            })
            .await
    }

    /// Retrieves a user by id
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let user = find_user(&mut conn, user_id)?;

        Ok(user.into())
    }

    /// Looks a user up by mail address
    fn find_by_mail(&self, mail: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user = users::table
            .filter(users::mail.eq(mail))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(user.map(User::from))
    }

    /// Lists users one page at a time, oldest first
    fn list_page(&self, query: &PageQuery) -> Result<Page<User>> {
        let mut conn = get_connection(&self.pool)?;

        let total_elements = users::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let results = users::table
            .select(UserDB::as_select())
            .order((users::created_at.asc(), users::id.asc()))
            .limit(query.limit())
            .offset(query.offset())
            .load::<UserDB>(&mut conn)
            .into_core()?;

        let content: Vec<User> = results.into_iter().map(User::from).collect();
        Ok(Page::new(content, query, total_elements))
    }
}
