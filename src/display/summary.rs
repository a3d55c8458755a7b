//! Monthly summary formatting

use tabled::Tabled;

use super::format::{format_bar, format_percentage, separator, table};
use crate::services::{BestEffort, CategorySummary, MonthlySummaryOutput};

const WIDTH: usize = 48;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

impl From<&CategorySummary> for CategoryRow {
    fn from(summary: &CategorySummary) -> Self {
        let used = match summary.percentage_used {
            Some(pct) => {
                let marker = if summary.exceeded { " !" } else { "" };
                format!(
                    "{} {}{}",
                    format_bar(pct, 100.0, 10),
                    format_percentage(pct),
                    marker
                )
            }
            None => "-".to_string(),
        };

        Self {
            category: summary.category_name.clone(),
            spent: summary.spent.to_string(),
            budget: summary
                .budget
                .map_or_else(|| "-".to_string(), |b| b.to_string()),
            remaining: summary
                .remaining
                .map_or_else(|| "-".to_string(), |r| r.to_string()),
            used,
        }
    }
}

fn degraded_note<T>(what: &str, lookup: &BestEffort<T>) -> Option<String> {
    lookup
        .reason()
        .map(|reason| format!("warning: {} unavailable ({})\n", what, reason))
}

/// Format the monthly summary report
pub fn format_monthly_summary(summary: &MonthlySummaryOutput) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", summary.period));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("Income:         {:>20}\n", summary.total_income.to_string()));
    output.push_str(&format!("Expenses:       {:>20}\n", summary.total_expenses.to_string()));
    output.push_str(&format!("  fixed charges {:>20}\n", summary.fixed_charges_total.to_string()));
    output.push_str(&format!("Net savings:    {:>20}\n", summary.net_savings.to_string()));
    output.push_str(&format!("Balance:        {:>20}\n", summary.balance.to_string()));
    output.push_str(&format!("Loans owed:     {:>20}\n", summary.total_loans_owed.to_string()));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let rows: Vec<CategoryRow> = summary
        .category_summaries
        .iter()
        .map(CategoryRow::from)
        .collect();
    output.push_str(&table(rows, "No expenses this month."));

    let notes = [
        degraded_note("budgets", &summary.budgets),
        degraded_note("loans", &summary.active_loans),
        degraded_note("fixed charges", &summary.fixed_charges),
    ];
    for note in notes.into_iter().flatten() {
        output.push_str(&note);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthPeriod};

    fn summary() -> MonthlySummaryOutput {
        MonthlySummaryOutput {
            period: MonthPeriod::new(2025, 5).unwrap(),
            total_income: Money::from_cents(500_000),
            total_expenses: Money::from_cents(200_000),
            net_savings: Money::from_cents(300_000),
            balance: Money::from_cents(300_000),
            category_summaries: vec![CategorySummary {
                category_name: "Food".into(),
                spent: Money::from_cents(50_000),
                budget: Some(Money::from_cents(40_000)),
                remaining: Some(Money::from_cents(-10_000)),
                percentage_used: Some(125.0),
                exceeded: true,
            }],
            budgets: BestEffort::Loaded(vec![]),
            total_loans_owed: Money::zero(),
            active_loans: BestEffort::Degraded {
                reason: "disk gone".into(),
            },
            fixed_charges: BestEffort::Loaded(vec![]),
            fixed_charges_total: Money::from_cents(150_000),
            transactions: vec![],
        }
    }

    #[test]
    fn test_summary_report() {
        let output = format_monthly_summary(&summary());
        assert!(output.starts_with("Summary for 2025-05\n"));
        assert!(output.contains("5000.00 MAD"));
        assert!(output.contains("-100.00 MAD"));
        assert!(output.contains("125% !"));
        assert!(output.contains("warning: loans unavailable (disk gone)"));
        assert!(!output.contains("warning: budgets"));
    }
}
