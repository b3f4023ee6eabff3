use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;

use super::budget_evaluator::classify;
use super::budget_model::{BudgetStatus, Dashboard};
use super::budget_traits::BudgetServiceTrait;
use crate::constants::{DASHBOARD_RECENT_EXPENSES, MAX_STORED_AMOUNT};
use crate::errors::{Result, ValidationError};
use crate::expenses::ExpenseRepositoryTrait;
use crate::users::{User, UserRepositoryTrait};
use crate::utils::Clock;

pub struct BudgetService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl BudgetService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        BudgetService {
            user_repository,
            expense_repository,
            clock,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn today_total(&self, user_id: i32) -> Result<i64> {
        self.expense_repository
            .sum_for_date(user_id, self.clock.today())
    }

    fn evaluate(&self, user: &User) -> Result<BudgetStatus> {
        self.evaluate_on(user, self.clock.today())
    }

    fn evaluate_on(&self, user: &User, date: NaiveDate) -> Result<BudgetStatus> {
        let today_total = self.expense_repository.sum_for_date(user.id, date)?;
        Ok(BudgetStatus {
            date,
            today_total,
            daily_limit: user.daily_limit,
            classification: classify(today_total, user.daily_limit),
        })
    }

    async fn set_daily_limit(&self, user_id: i32, new_limit: i64) -> Result<User> {
        if !(0..=MAX_STORED_AMOUNT).contains(&new_limit) {
            return Err(ValidationError::OutOfRange {
                field: "dailyLimit".to_string(),
                min: 0,
                max: MAX_STORED_AMOUNT,
            }
            .into());
        }

        let user = self
            .user_repository
            .update_daily_limit(user_id, new_limit)
            .await?;
        info!("Account {} daily limit set to {}", user.id, user.daily_limit);
        Ok(user)
    }

    fn get_dashboard(&self, user_id: i32) -> Result<Dashboard> {
        let user = self.user_repository.get_user(user_id)?;
        let status = self.evaluate(&user)?;
        let recent_expenses = self
            .expense_repository
            .list_recent(user_id, DASHBOARD_RECENT_EXPENSES)?;

        Ok(Dashboard {
            alert: status.alert_text(),
            status,
            recent_expenses,
        })
    }
}
