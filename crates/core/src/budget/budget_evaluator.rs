//! Threshold classification of a daily total against a daily limit.

use super::budget_model::BudgetClassification;
use crate::constants::{NEARING_THRESHOLD_DENOMINATOR, NEARING_THRESHOLD_NUMERATOR};

/// Classifies `total` against `limit`.
///
/// A non-positive limit means no limit is configured. The 90% comparison is
/// done in widened integer arithmetic (`total * 10 >= limit * 9`) so a total
/// sitting exactly on the threshold is `Nearing`.
pub fn classify(total: i64, limit: i64) -> BudgetClassification {
    if limit <= 0 {
        return BudgetClassification::Normal;
    }
    if total >= limit {
        return BudgetClassification::Exceeded;
    }

    let scaled_total = i128::from(total) * i128::from(NEARING_THRESHOLD_DENOMINATOR);
    let scaled_limit = i128::from(limit) * i128::from(NEARING_THRESHOLD_NUMERATOR);
    if scaled_total >= scaled_limit {
        BudgetClassification::Nearing
    } else {
        BudgetClassification::Normal
    }
}
