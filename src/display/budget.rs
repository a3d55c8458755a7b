//! Budget display formatting

use tabled::Tabled;

use super::format::table;
use crate::models::{Budget, MonthPeriod};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
}

pub fn format_budget_list(budgets: &[Budget], period: MonthPeriod) -> String {
    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id().to_string(),
            category: b.category().name().to_string(),
            limit: b.limit().to_string(),
        })
        .collect();
    format!(
        "Budgets for {}\n{}",
        period,
        table(rows, "No budgets set.")
    )
}
