use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::expenses_model::{Expense, ExpenseReceipt, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::budget::BudgetServiceTrait;
use crate::constants::{DASHBOARD_RECENT_EXPENSES, MAX_RECENT_EXPENSES};
use crate::errors::Result;
use crate::notifications::NotifierTrait;
use crate::users::UserRepositoryTrait;
use crate::utils::Clock;

/// Records expenses and runs the budget check that follows every write.
pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    notifier: Arc<dyn NotifierTrait>,
    clock: Arc<dyn Clock>,
}

impl ExpenseService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        notifier: Arc<dyn NotifierTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        ExpenseService {
            expense_repository,
            user_repository,
            budget_service,
            notifier,
            clock,
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn record_expense(
        &self,
        user_id: i32,
        new_expense: NewExpense,
    ) -> Result<ExpenseReceipt> {
        let new_expense = new_expense.normalized()?;

        let expense = self
            .expense_repository
            .insert_expense(new_expense.into_record(user_id, self.clock.today()))
            .await?;
        debug!(
            "Recorded expense {} of {} for account {}",
            expense.id, expense.amount, user_id
        );

        // Limit is re-read so a concurrent budget change is honored.
        let user = self.user_repository.get_user(user_id)?;
        let status = self.budget_service.evaluate_on(&user, expense.created_at)?;

        let alert_sent = if status.classification.is_alert() {
            info!(
                "Account {} is {} its daily budget ({} / {})",
                user.id,
                status.classification.label(),
                status.today_total,
                status.daily_limit
            );
            self.notifier
                .notify(
                    &user,
                    status.classification,
                    status.today_total,
                    status.daily_limit,
                )
                .await
        } else {
            false
        };

        Ok(ExpenseReceipt {
            expense,
            status,
            alert_sent,
        })
    }

    fn list_recent(&self, user_id: i32, limit: Option<i64>) -> Result<Vec<Expense>> {
        let limit = limit
            .unwrap_or(DASHBOARD_RECENT_EXPENSES)
            .clamp(1, MAX_RECENT_EXPENSES);
        self.expense_repository.list_recent(user_id, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{BudgetClassification, BudgetService};
    use crate::errors::{Error, ValidationError};
    use crate::testing::{date, InMemoryStore, StubNotifier};
    use crate::utils::FixedClock;
    use chrono::NaiveDate;

    struct Fixture {
        store: Arc<InMemoryStore>,
        notifier: Arc<StubNotifier>,
        service: ExpenseService,
    }

    fn fixture(today: NaiveDate, notifier: StubNotifier) -> Fixture {
        let store = Arc::new(InMemoryStore::default());
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(today));
        let notifier = Arc::new(notifier);
        let budget = Arc::new(BudgetService::new(
            store.clone(),
            store.clone(),
            clock.clone(),
        ));
        let service = ExpenseService::new(
            store.clone(),
            store.clone(),
            budget,
            notifier.clone(),
            clock,
        );
        Fixture {
            store,
            notifier,
            service,
        }
    }

    fn expense(amount: i64, category: &str) -> NewExpense {
        NewExpense {
            amount,
            category: category.to_string(),
            note: None,
        }
    }

    #[tokio::test]
    async fn test_first_expense_nearing_limit_notifies() {
        let f = fixture(date(2024, 5, 1), StubNotifier::succeeding());
        let user = f.store.add_user("asha@example.com", 500);

        let receipt = f
            .service
            .record_expense(user.id, expense(450, "Food"))
            .await
            .unwrap();

        assert_eq!(receipt.status.today_total, 450);
        assert_eq!(receipt.status.classification, BudgetClassification::Nearing);
        assert!(receipt.alert_sent);
        assert_eq!(
            f.notifier.calls(),
            vec![(user.id, BudgetClassification::Nearing, 450, 500)]
        );
        assert_eq!(receipt.expense.created_at, date(2024, 5, 1));
        assert_eq!(receipt.expense.user_id, user.id);
    }

    #[tokio::test]
    async fn test_crossing_limit_reports_exceeded() {
        let f = fixture(date(2024, 5, 1), StubNotifier::succeeding());
        let user = f.store.add_user("asha@example.com", 500);
        f.service
            .record_expense(user.id, expense(450, "Food"))
            .await
            .unwrap();

        let receipt = f
            .service
            .record_expense(user.id, expense(100, "Travel"))
            .await
            .unwrap();

        assert_eq!(receipt.status.today_total, 550);
        assert_eq!(receipt.status.classification, BudgetClassification::Exceeded);
        assert_eq!(f.notifier.calls().len(), 2);
        assert_eq!(
            f.notifier.calls()[1],
            (user.id, BudgetClassification::Exceeded, 550, 500)
        );
    }

    #[tokio::test]
    async fn test_zero_limit_never_notifies() {
        let f = fixture(date(2024, 5, 1), StubNotifier::succeeding());
        let user = f.store.add_user("asha@example.com", 0);

        let receipt = f
            .service
            .record_expense(user.id, expense(10_000, "Rent"))
            .await
            .unwrap();

        assert_eq!(receipt.status.classification, BudgetClassification::Normal);
        assert!(!receipt.alert_sent);
        assert!(f.notifier.calls().is_empty());
    }

    #[tokio::test]
    async fn test_yesterdays_spending_is_ignored() {
        let f = fixture(date(2024, 5, 2), StubNotifier::succeeding());
        let user = f.store.add_user("asha@example.com", 500);
        f.store.add_expense(user.id, 480, date(2024, 5, 1));

        let receipt = f
            .service
            .record_expense(user.id, expense(20, "Food"))
            .await
            .unwrap();

        assert_eq!(receipt.status.today_total, 20);
        assert_eq!(receipt.status.classification, BudgetClassification::Normal);
    }

    #[tokio::test]
    async fn test_invalid_input_writes_nothing() {
        let f = fixture(date(2024, 5, 1), StubNotifier::succeeding());
        let user = f.store.add_user("asha@example.com", 500);

        let err = f
            .service
            .record_expense(user.id, expense(0, "Food"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::OutOfRange { .. })));

        let err = f
            .service
            .record_expense(user.id, expense(10, "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingField(_))));

        assert_eq!(f.store.expense_count(), 0);
        assert!(f.notifier.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_notification_keeps_expense() {
        let f = fixture(date(2024, 5, 1), StubNotifier::failing());
        let user = f.store.add_user("asha@example.com", 500);

        let receipt = f
            .service
            .record_expense(user.id, expense(600, "Food"))
            .await
            .unwrap();

        assert!(!receipt.alert_sent);
        assert_eq!(receipt.status.classification, BudgetClassification::Exceeded);
        assert_eq!(f.notifier.calls().len(), 1);
        assert_eq!(f.store.expense_count(), 1);
    }

    #[tokio::test]
    async fn test_list_recent_clamps_limit() {
        let f = fixture(date(2024, 5, 1), StubNotifier::succeeding());
        let user = f.store.add_user("asha@example.com", 500);
        for _ in 0..15 {
            f.store.add_expense(user.id, 1, date(2024, 5, 1));
        }

        assert_eq!(f.service.list_recent(user.id, None).unwrap().len(), 10);
        assert_eq!(f.service.list_recent(user.id, Some(0)).unwrap().len(), 1);
        assert_eq!(f.service.list_recent(user.id, Some(500)).unwrap().len(), 15);
    }
}
