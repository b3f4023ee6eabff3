use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use tokio::task::spawn_blocking;

use super::credentials;
use super::users_model::{normalize_email, NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn signup(&self, new_user: NewUser) -> Result<User> {
        let new_user = new_user.normalized()?;

        if self.repository.email_exists(&new_user.email)? {
            return Err(Error::ConstraintViolation("Email already exists".to_string()));
        }

        let password = new_user.password.clone();
        let password_hash = spawn_blocking(move || credentials::hash_password(&password)).await??;

        let user = self
            .repository
            .insert_user(new_user.into_record(password_hash))
            .await
            .map_err(|err| match err {
                // Lost a race with a concurrent signup for the same email
                Error::Database(DatabaseError::UniqueViolation(_)) => {
                    Error::ConstraintViolation("Email already exists".to_string())
                }
                other => other,
            })?;

        info!("Created account {}", user.id);
        Ok(user)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);
        let found = self.repository.find_credentials_by_email(&email)?;
        let candidate = password.to_string();

        let Some(found) = found else {
            spawn_blocking(move || credentials::verify_against_dummy(&candidate)).await?;
            debug!("Login rejected for unknown email");
            return Err(Error::InvalidCredentials);
        };

        let stored_hash = found.password_hash;
        let matched =
            spawn_blocking(move || credentials::verify_password(&candidate, &stored_hash))
                .await??;

        if !matched {
            debug!("Login rejected for account {}", found.user.id);
            return Err(Error::InvalidCredentials);
        }

        Ok(found.user)
    }

    fn get_user(&self, user_id: i32) -> Result<User> {
        self.repository.get_user(user_id)
    }
}
