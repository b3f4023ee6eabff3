use chrono::NaiveDate;
use dailycap_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpenseRecord};
use dailycap_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use crate::schema::expenses::dsl::*;
use async_trait::async_trait;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ExpenseRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    async fn insert_expense(&self, new_expense: NewExpenseRecord) -> Result<Expense> {
        let new_expense_db = NewExpenseDB::try_from(new_expense)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let result_db = diesel::insert_into(expenses::table)
                    .values(&new_expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    fn sum_for_date(&self, owner_id: i32, date: NaiveDate) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total = expenses
            .filter(user_id.eq(owner_id))
            .filter(created_at.eq(date))
            .select(sum(amount))
            .first::<Option<i64>>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total.unwrap_or(0))
    }

    fn list_recent(&self, owner_id: i32, max_rows: i64) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses
            .filter(user_id.eq(owner_id))
            .order(id.desc())
            .limit(max_rows)
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }
}
