use crate::errors::Result;
use crate::users::users_model::{NewUser, NewUserRecord, User, UserCredentials};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_user(&self, user_id: i32) -> Result<User>;
    /// `email` must already be normalized.
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    fn email_exists(&self, email: &str) -> Result<bool>;
    async fn insert_user(&self, new_user: NewUserRecord) -> Result<User>;
    async fn update_daily_limit(&self, user_id: i32, daily_limit: i64) -> Result<User>;
}

/// Trait for account and authentication operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn signup(&self, new_user: NewUser) -> Result<User>;
    async fn authenticate(&self, email: &str, password: &str) -> Result<User>;
    fn get_user(&self, user_id: i32) -> Result<User>;
}
