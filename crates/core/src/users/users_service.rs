use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::audit::{record_best_effort, AuditSinkTrait, EssenceType, NewAuditRecord};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Service for managing users.
///
/// Mail addresses are normalized to lowercase before they reach storage, so
/// uniqueness and lookups are case-insensitive.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    audit_sink: Arc<dyn AuditSinkTrait>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(repository: Arc<dyn UserRepositoryTrait>, audit_sink: Arc<dyn AuditSinkTrait>) -> Self {
        Self {
            repository,
            audit_sink,
        }
    }

    async fn create_user(&self, mut new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        new_user.mail = new_user.mail.trim().to_lowercase();
        self.repository.create(new_user).await
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        debug!("Registering user {}", new_user.mail);
        self.create_user(new_user).await
    }

    fn find_by_mail(&self, mail: &str) -> Result<Option<User>> {
        self.repository.find_by_mail(&mail.trim().to_lowercase())
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn get_users_page(&self, query: &PageQuery) -> Result<Page<User>> {
        query.validate()?;
        self.repository.list_page(query)
    }

    async fn create_user_by_admin(&self, admin_id: &str, new_user: NewUser) -> Result<User> {
        debug!("Admin {} creating user {}", admin_id, new_user.mail);
        let user = self.create_user(new_user).await?;
        record_best_effort(
            self.audit_sink.as_ref(),
            NewAuditRecord::new(
                admin_id,
                format!("Admin created user {}", user.mail),
                EssenceType::User,
                &user.id,
            ),
        )
        .await;
        Ok(user)
    }

    async fn update_user_by_admin(
        &self,
        admin_id: &str,
        user_id: &str,
        mut user_update: UserUpdate,
        supplied_version: i64,
    ) -> Result<User> {
        user_update.validate()?;
        user_update.mail = user_update.mail.trim().to_lowercase();
        debug!("Admin {} updating user {}", admin_id, user_id);
        let user = self
            .repository
            .update(user_id, user_update, supplied_version)
            .await?;
        record_best_effort(
            self.audit_sink.as_ref(),
            NewAuditRecord::new(
                admin_id,
                format!("Admin updated user {}", user.mail),
                EssenceType::User,
                &user.id,
            ),
        )
        .await;
        Ok(user)
    }
}
