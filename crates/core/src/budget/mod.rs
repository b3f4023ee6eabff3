//! Budget module - daily totals, threshold classification and limits.

mod budget_evaluator;
mod budget_model;
mod budget_service;
mod budget_traits;

pub use budget_evaluator::classify;
pub use budget_model::{BudgetClassification, BudgetStatus, Dashboard};
pub use budget_service::BudgetService;
pub use budget_traits::BudgetServiceTrait;
