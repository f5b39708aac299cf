//! Budget threshold evaluation.

use std::collections::BTreeMap;

use crate::report::{BudgetResult, ScoreMap};

/// Caller-supplied minimum acceptable score per category name.
///
/// `"global"` is a valid key and gates the composite score.
pub type Budgets = BTreeMap<String, f64>;

/// Compare final scores against budget thresholds.
///
/// Keys that do not name a known score are ignored rather than rejected, so
/// one budgets file can be shared across tool configurations.
pub fn evaluate(score: &ScoreMap, budgets: &Budgets) -> BTreeMap<String, BudgetResult> {
    let mut results = BTreeMap::new();
    for (category, &threshold) in budgets {
        if let Some(actual) = score.get(category) {
            results.insert(
                category.clone(),
                BudgetResult {
                    threshold,
                    actual,
                    passed: actual >= threshold,
                },
            );
        }
    }
    results
}
