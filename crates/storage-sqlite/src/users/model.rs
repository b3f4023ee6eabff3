//! Database models for users.

use diesel::prelude::*;

use crate::errors::StorageError;
use dailycap_core::users::{NewUserRecord, User, UserCredentials};

/// Database model for users. `password` holds the argon2 PHC string.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub daily_limit: i32,
}

/// Database model for creating a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub name: String,
    pub email: String,
    pub password: String,
    pub daily_limit: i32,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        User {
            id: db.id,
            name: db.name,
            email: db.email,
            daily_limit: i64::from(db.daily_limit),
        }
    }
}

impl From<UserDB> for UserCredentials {
    fn from(db: UserDB) -> Self {
        let password_hash = db.password.clone();
        UserCredentials {
            user: User::from(db),
            password_hash,
        }
    }
}

impl TryFrom<NewUserRecord> for NewUserDB {
    type Error = StorageError;

    fn try_from(record: NewUserRecord) -> Result<Self, Self::Error> {
        Ok(NewUserDB {
            name: record.name,
            email: record.email,
            password: record.password_hash,
            daily_limit: i32::try_from(record.daily_limit)
                .map_err(|_| StorageError::OutOfRange("daily_limit"))?,
        })
    }
}
