//! In-memory repositories and stubs shared by the service tests.

use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::budget::BudgetClassification;
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait, NewExpenseRecord};
use crate::notifications::NotifierTrait;
use crate::users::{NewUserRecord, User, UserCredentials, UserRepositoryTrait};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<UserCredentials>>,
    expenses: RwLock<Vec<Expense>>,
}

impl InMemoryStore {
    pub fn add_user(&self, email: &str, daily_limit: i64) -> User {
        let mut users = self.users.write().unwrap();
        let user = User {
            id: users.len() as i32 + 1,
            name: "Test User".to_string(),
            email: email.to_string(),
            daily_limit,
        };
        users.push(UserCredentials {
            user: user.clone(),
            password_hash: String::new(),
        });
        user
    }

    pub fn add_expense(&self, user_id: i32, amount: i64, created_at: NaiveDate) -> Expense {
        let mut expenses = self.expenses.write().unwrap();
        let expense = Expense {
            id: expenses.len() as i32 + 1,
            user_id,
            amount,
            category: "Misc".to_string(),
            note: None,
            created_at,
        };
        expenses.push(expense.clone());
        expense
    }

    pub fn user(&self, user_id: i32) -> User {
        self.get_user(user_id).unwrap()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.read().unwrap().len()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryStore {
    fn get_user(&self, user_id: i32) -> Result<User> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.user.clone())
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(format!("user {user_id}"))))
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|c| c.user.email == email)
            .cloned())
    }

    fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.find_credentials_by_email(email)?.is_some())
    }

    async fn insert_user(&self, _new_user: NewUserRecord) -> Result<User> {
        unimplemented!()
    }

    async fn update_daily_limit(&self, user_id: i32, daily_limit: i64) -> Result<User> {
        let mut users = self.users.write().unwrap();
        let found = users
            .iter_mut()
            .find(|c| c.user.id == user_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(format!("user {user_id}"))))?;
        found.user.daily_limit = daily_limit;
        Ok(found.user.clone())
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryStore {
    async fn insert_expense(&self, new_expense: NewExpenseRecord) -> Result<Expense> {
        let mut expenses = self.expenses.write().unwrap();
        let expense = Expense {
            id: expenses.len() as i32 + 1,
            user_id: new_expense.user_id,
            amount: new_expense.amount,
            category: new_expense.category,
            note: new_expense.note,
            created_at: new_expense.created_at,
        };
        expenses.push(expense.clone());
        Ok(expense)
    }

    fn sum_for_date(&self, user_id: i32, date: NaiveDate) -> Result<i64> {
        Ok(self
            .expenses
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && e.created_at == date)
            .map(|e| e.amount)
            .sum())
    }

    fn list_recent(&self, user_id: i32, limit: i64) -> Result<Vec<Expense>> {
        let mut found: Vec<Expense> = self
            .expenses
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.id.cmp(&a.id));
        found.truncate(limit as usize);
        Ok(found)
    }
}

/// Records every call and answers with a fixed delivery result.
pub struct StubNotifier {
    delivers: bool,
    calls: Mutex<Vec<(i32, BudgetClassification, i64, i64)>>,
}

impl StubNotifier {
    pub fn succeeding() -> Self {
        StubNotifier {
            delivers: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        StubNotifier {
            delivers: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(i32, BudgetClassification, i64, i64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifierTrait for StubNotifier {
    async fn notify(
        &self,
        user: &User,
        classification: BudgetClassification,
        total: i64,
        limit: i64,
    ) -> bool {
        self.calls
            .lock()
            .unwrap()
            .push((user.id, classification, total, limit));
        self.delivers
    }
}
