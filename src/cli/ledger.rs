//! Salary, expense and summary commands
//!
//! The three top-level commands that drive the use cases directly.

use clap::Args;

use super::dates::{parse_date, parse_month};
use crate::display;
use crate::error::MokaResult;
use crate::services::{
    AddSalary, AddSalaryInput, GetMonthlySummary, RecordExpense, RecordExpenseInput,
};
use crate::storage::Storage;

/// Arguments for `moka salary`
#[derive(Args)]
pub struct SalaryArgs {
    /// Amount received (e.g. "5000" or "5000.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    /// What the salary is for (e.g. "May")
    pub description: String,
    /// Date received (YYYY-MM-DD), defaults to now
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `moka expense`
#[derive(Args)]
pub struct ExpenseArgs {
    /// Amount spent
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    /// Category name (e.g. Food, Transport, or any name)
    pub category: String,
    /// What the money was spent on
    pub description: String,
    /// Date spent (YYYY-MM-DD), defaults to now
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `moka summary`
#[derive(Args)]
pub struct SummaryArgs {
    /// Month (YYYY-MM, "current" or "last"), defaults to current
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Record a salary and deduct the active fixed charges
pub fn handle_salary_command(storage: &Storage, args: SalaryArgs) -> MokaResult<()> {
    let input = AddSalaryInput {
        amount: args.amount,
        description: args.description,
        date: parse_date(args.date.as_deref())?,
    };

    let output = AddSalary::new(&storage.transactions, &storage.fixed_charges).execute(input)?;
    print!("{}", display::format_salary_recorded(&output));
    Ok(())
}

/// Record an expense, reporting the category budget if one is set
pub fn handle_expense_command(storage: &Storage, args: ExpenseArgs) -> MokaResult<()> {
    let input = RecordExpenseInput {
        amount: args.amount,
        category_name: args.category,
        description: args.description,
        date: parse_date(args.date.as_deref())?,
    };

    let output = RecordExpense::new(&storage.transactions, &storage.budgets).execute(input)?;
    print!("{}", display::format_expense_recorded(&output));
    Ok(())
}

/// Print the monthly summary
pub fn handle_summary_command(storage: &Storage, args: SummaryArgs) -> MokaResult<()> {
    let period = parse_month(args.month.as_deref())?;

    let output = GetMonthlySummary::new(
        &storage.transactions,
        &storage.budgets,
        &storage.loans,
        &storage.fixed_charges,
    )
    .execute(period.into())?;

    print!("{}", display::format_monthly_summary(&output));
    Ok(())
}
