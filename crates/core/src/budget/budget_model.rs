//! Budget domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::CURRENCY_SYMBOL;
use crate::expenses::Expense;

/// Where today's total stands relative to the daily limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetClassification {
    Normal,
    Nearing,
    Exceeded,
}

impl BudgetClassification {
    /// Nearing and Exceeded trigger an alert.
    pub fn is_alert(self) -> bool {
        !matches!(self, BudgetClassification::Normal)
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetClassification::Normal => "Normal",
            BudgetClassification::Nearing => "Nearing",
            BudgetClassification::Exceeded => "Exceeded",
        }
    }
}

/// Result of evaluating one user's spending for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub date: NaiveDate,
    pub today_total: i64,
    pub daily_limit: i64,
    pub classification: BudgetClassification,
}

impl BudgetStatus {
    /// Alert line shown on the dashboard, if any.
    pub fn alert_text(&self) -> Option<String> {
        match self.classification {
            BudgetClassification::Normal => None,
            BudgetClassification::Exceeded => Some(format!(
                "You have exceeded your daily budget of {CURRENCY_SYMBOL}{}! (Spent {CURRENCY_SYMBOL}{})",
                self.daily_limit, self.today_total
            )),
            BudgetClassification::Nearing => Some(format!(
                "You are nearing your daily limit. Spent {CURRENCY_SYMBOL}{} / {CURRENCY_SYMBOL}{}.",
                self.today_total, self.daily_limit
            )),
        }
    }
}

/// Everything the dashboard shows for the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub status: BudgetStatus,
    pub alert: Option<String>,
    pub recent_expenses: Vec<Expense>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(total: i64, limit: i64, classification: BudgetClassification) -> BudgetStatus {
        BudgetStatus {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            today_total: total,
            daily_limit: limit,
            classification,
        }
    }

    #[test]
    fn test_alert_text_exceeded() {
        let text = status(550, 500, BudgetClassification::Exceeded)
            .alert_text()
            .unwrap();
        assert_eq!(
            text,
            "You have exceeded your daily budget of ₹500! (Spent ₹550)"
        );
    }

    #[test]
    fn test_alert_text_nearing() {
        let text = status(450, 500, BudgetClassification::Nearing)
            .alert_text()
            .unwrap();
        assert_eq!(text, "You are nearing your daily limit. Spent ₹450 / ₹500.");
    }

    #[test]
    fn test_no_alert_when_normal() {
        assert!(status(10, 500, BudgetClassification::Normal)
            .alert_text()
            .is_none());
    }

    #[test]
    fn test_only_nearing_and_exceeded_alert() {
        assert!(!BudgetClassification::Normal.is_alert());
        assert!(BudgetClassification::Nearing.is_alert());
        assert!(BudgetClassification::Exceeded.is_alert());
    }
}
