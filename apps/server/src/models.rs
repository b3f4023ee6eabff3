use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use dailycap_core::budget as core_budget;
use dailycap_core::expenses as core_expenses;
use dailycap_core::users as core_users;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub daily_limit: i64,
}

impl From<core_users::User> for User {
    fn from(u: core_users::User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            daily_limit: u.daily_limit,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<SignupRequest> for core_users::NewUser {
    fn from(r: SignupRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            password: r.password,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: User,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i32,
    pub amount: i64,
    pub category: String,
    pub note: Option<String>,
    pub created_at: NaiveDate,
}

impl From<core_expenses::Expense> for Expense {
    fn from(e: core_expenses::Expense) -> Self {
        Self {
            id: e.id,
            amount: e.amount,
            category: e.category,
            note: e.note,
            created_at: e.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: i64,
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl From<NewExpense> for core_expenses::NewExpense {
    fn from(e: NewExpense) -> Self {
        Self {
            amount: e.amount,
            category: e.category,
            note: e.note,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct RecentExpensesQuery {
    pub limit: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetClassification {
    Normal,
    Nearing,
    Exceeded,
}

impl From<core_budget::BudgetClassification> for BudgetClassification {
    fn from(c: core_budget::BudgetClassification) -> Self {
        match c {
            core_budget::BudgetClassification::Normal => Self::Normal,
            core_budget::BudgetClassification::Nearing => Self::Nearing,
            core_budget::BudgetClassification::Exceeded => Self::Exceeded,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub date: NaiveDate,
    pub today_total: i64,
    pub daily_limit: i64,
    pub classification: BudgetClassification,
    pub alert: Option<String>,
}

impl From<core_budget::BudgetStatus> for BudgetStatus {
    fn from(s: core_budget::BudgetStatus) -> Self {
        Self {
            alert: s.alert_text(),
            date: s.date,
            today_total: s.today_total,
            daily_limit: s.daily_limit,
            classification: s.classification.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub daily_limit: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today_total: i64,
    pub daily_limit: i64,
    pub classification: BudgetClassification,
    pub alert: Option<String>,
    pub recent_expenses: Vec<Expense>,
}

impl From<core_budget::Dashboard> for Dashboard {
    fn from(d: core_budget::Dashboard) -> Self {
        Self {
            today_total: d.status.today_total,
            daily_limit: d.status.daily_limit,
            classification: d.status.classification.into(),
            alert: d.alert,
            recent_expenses: d.recent_expenses.into_iter().map(Expense::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReceipt {
    pub expense: Expense,
    pub status: BudgetStatus,
    pub alert_sent: bool,
}

impl From<core_expenses::ExpenseReceipt> for ExpenseReceipt {
    fn from(r: core_expenses::ExpenseReceipt) -> Self {
        Self {
            expense: r.expense.into(),
            status: r.status.into(),
            alert_sent: r.alert_sent,
        }
    }
}
