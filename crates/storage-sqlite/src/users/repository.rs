use dailycap_core::users::{NewUserRecord, User, UserCredentials, UserRepositoryTrait};
use dailycap_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        UserRepository { pool, writer }
    }

    fn find_by_email(&self, user_email: &str) -> Result<Option<UserDB>> {
        let mut conn = get_connection(&self.pool)?;
        let found = users
            .filter(email.eq(user_email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found)
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_user(&self, user_id: i32) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(User::from(user_db))
    }

    fn find_credentials_by_email(&self, user_email: &str) -> Result<Option<UserCredentials>> {
        Ok(self.find_by_email(user_email)?.map(UserCredentials::from))
    }

    fn email_exists(&self, user_email: &str) -> Result<bool> {
        Ok(self.find_by_email(user_email)?.is_some())
    }

    async fn insert_user(&self, new_user: NewUserRecord) -> Result<User> {
        let new_user_db = NewUserDB::try_from(new_user)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    async fn update_daily_limit(&self, user_id: i32, new_limit: i64) -> Result<User> {
        let new_limit =
            i32::try_from(new_limit).map_err(|_| StorageError::OutOfRange("daily_limit"))?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result_db = diesel::update(users.find(user_id))
                    .set(daily_limit.eq(new_limit))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }
}
