//! Expense domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetStatus;
use crate::constants::{MAX_CATEGORY_LENGTH, MAX_NOTE_LENGTH, MAX_STORED_AMOUNT};
use crate::errors::{Result, ValidationError};

/// A single spending entry. `created_at` is the calendar date the expense
/// was recorded on, not a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i32,
    pub user_id: i32,
    pub amount: i64,
    pub category: String,
    pub note: Option<String>,
    pub created_at: NaiveDate,
}

/// Input model for recording an expense.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: i64,
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Row to persist, already validated and attributed.
#[derive(Debug, Clone)]
pub struct NewExpenseRecord {
    pub user_id: i32,
    pub amount: i64,
    pub category: String,
    pub note: Option<String>,
    pub created_at: NaiveDate,
}

/// Outcome of recording an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReceipt {
    pub expense: Expense,
    pub status: BudgetStatus,
    pub alert_sent: bool,
}

impl NewExpense {
    /// Checks amount and text fields, trimming the category and dropping a
    /// blank note.
    pub fn normalized(self) -> Result<NewExpense> {
        if !(1..=MAX_STORED_AMOUNT).contains(&self.amount) {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: 1,
                max: MAX_STORED_AMOUNT,
            }
            .into());
        }

        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if category.chars().count() > MAX_CATEGORY_LENGTH {
            return Err(ValidationError::TooLong {
                field: "category".to_string(),
                max: MAX_CATEGORY_LENGTH,
            }
            .into());
        }

        let note = self
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if let Some(n) = &note {
            if n.chars().count() > MAX_NOTE_LENGTH {
                return Err(ValidationError::TooLong {
                    field: "note".to_string(),
                    max: MAX_NOTE_LENGTH,
                }
                .into());
            }
        }

        Ok(NewExpense {
            amount: self.amount,
            category,
            note,
        })
    }

    pub(crate) fn into_record(self, user_id: i32, created_at: NaiveDate) -> NewExpenseRecord {
        NewExpenseRecord {
            user_id,
            amount: self.amount,
            category: self.category,
            note: self.note,
            created_at,
        }
    }
}
