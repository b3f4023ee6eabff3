use crate::budget::budget_model::{BudgetStatus, Dashboard};
use crate::errors::Result;
use crate::users::User;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for the budget evaluator and daily limit configuration
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Sum of the user's expenses dated today; 0 when there are none.
    fn today_total(&self, user_id: i32) -> Result<i64>;
    /// Today's status for `user`, using the limit carried by `user`.
    fn evaluate(&self, user: &User) -> Result<BudgetStatus>;
    fn evaluate_on(&self, user: &User, date: NaiveDate) -> Result<BudgetStatus>;
    async fn set_daily_limit(&self, user_id: i32, new_limit: i64) -> Result<User>;
    fn get_dashboard(&self, user_id: i32) -> Result<Dashboard>;
}
