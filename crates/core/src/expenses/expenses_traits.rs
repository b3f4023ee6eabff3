use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseReceipt, NewExpense, NewExpenseRecord};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn insert_expense(&self, new_expense: NewExpenseRecord) -> Result<Expense>;
    /// Sum of the user's amounts dated `date`; 0 when there are none.
    fn sum_for_date(&self, user_id: i32, date: NaiveDate) -> Result<i64>;
    /// Most recent first, by id.
    fn list_recent(&self, user_id: i32, limit: i64) -> Result<Vec<Expense>>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn record_expense(&self, user_id: i32, new_expense: NewExpense)
        -> Result<ExpenseReceipt>;
    fn list_recent(&self, user_id: i32, limit: Option<i64>) -> Result<Vec<Expense>>;
}
