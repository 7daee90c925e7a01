//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, User, UserUpdate};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Creates a new user.
    ///
    /// Fails with `DuplicateMail` when the mail address is already
    /// registered.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Updates a user's profile fields, guarded by the version token.
    ///
    /// Moving the mail onto an address another user holds is
    /// `DuplicateMail`.
    async fn update(
        &self,
        user_id: &str,
        user_update: UserUpdate,
        supplied_version: i64,
    ) -> Result<User>;

    /// Retrieves one user by id.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Looks a user up by mail address, `None` when unknown.
    fn find_by_mail(&self, mail: &str) -> Result<Option<User>>;

    /// Lists users one page at a time, in creation order.
    fn list_page(&self, query: &PageQuery) -> Result<Page<User>>;
}

/// Trait defining the contract for User service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Self registration: creates an activated USER-role user.
    async fn register(&self, new_user: NewUser) -> Result<User>;

    /// Looks a user up by mail for credential verification.
    fn find_by_mail(&self, mail: &str) -> Result<Option<User>>;

    /// Retrieves one user's profile.
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Lists users one page at a time.
    fn get_users_page(&self, query: &PageQuery) -> Result<Page<User>>;

    /// Admin path: creates a user with an explicit role and status; audited.
    async fn create_user_by_admin(&self, admin_id: &str, new_user: NewUser) -> Result<User>;

    /// Admin path: updates a user's profile, guarded by its version token;
    /// audited.
    async fn update_user_by_admin(
        &self,
        admin_id: &str,
        user_id: &str,
        user_update: UserUpdate,
        supplied_version: i64,
    ) -> Result<User>;
}
