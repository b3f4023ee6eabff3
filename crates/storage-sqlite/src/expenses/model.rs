//! Database models for expenses.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::users::UserDB;
use dailycap_core::expenses::{Expense, NewExpenseRecord};

/// Database model for expenses
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: i32,
    pub user_id: i32,
    pub amount: i32,
    pub category: String,
    pub note: Option<String>,
    pub created_at: NaiveDate,
}

/// Database model for creating a new expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub user_id: i32,
    pub amount: i32,
    pub category: String,
    pub note: Option<String>,
    pub created_at: NaiveDate,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Expense {
            id: db.id,
            user_id: db.user_id,
            amount: i64::from(db.amount),
            category: db.category,
            note: db.note,
            created_at: db.created_at,
        }
    }
}

impl TryFrom<NewExpenseRecord> for NewExpenseDB {
    type Error = StorageError;

    fn try_from(record: NewExpenseRecord) -> Result<Self, Self::Error> {
        Ok(NewExpenseDB {
            user_id: record.user_id,
            amount: i32::try_from(record.amount).map_err(|_| StorageError::OutOfRange("amount"))?,
            category: record.category,
            note: record.note,
            created_at: record.created_at,
        })
    }
}
