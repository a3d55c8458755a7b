//! Monthly summary
//!
//! Totals for one calendar month, per-category spend joined against that
//! month's budgets, and the current loan and fixed-charge positions.
//!
//! Only the transaction lookup is required. Budgets, loans and fixed
//! charges are read best-effort; a failed read shows up as
//! [`BestEffort::Degraded`] and counts as empty.
//!
//! The reported expenses, savings and balance add the active fixed charges
//! on top of the month's transactions. Charges already booked by a salary
//! are therefore counted twice.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{MokaError, MokaResult};
use crate::models::fixed_charge::total_of_active;
use crate::models::loan::total_owed;
use crate::models::transaction::{balance, category_totals, total_by_kind};
use crate::models::{Budget, FixedCharge, Loan, Money, MonthPeriod, Transaction, TransactionKind};
use crate::services::best_effort::BestEffort;
use crate::storage::{
    BudgetRepository, FixedChargeRepository, LoanRepository, TransactionRepository,
};

#[derive(Debug, Clone, Copy)]
pub struct MonthlySummaryInput {
    pub year: i32,
    pub month: u32,
}

impl From<MonthPeriod> for MonthlySummaryInput {
    fn from(period: MonthPeriod) -> Self {
        Self {
            year: period.year(),
            month: period.month(),
        }
    }
}

/// Spend in one expense category, with its budget if one is set
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category_name: String,
    pub spent: Money,
    pub budget: Option<Money>,
    pub remaining: Option<Money>,
    pub percentage_used: Option<f64>,
    pub exceeded: bool,
}

impl CategorySummary {
    fn new(category_name: String, spent: Money, budget: Option<&Budget>) -> Self {
        match budget {
            Some(b) => Self {
                category_name,
                spent,
                budget: Some(b.limit()),
                remaining: Some(b.remaining_amount(spent)),
                percentage_used: Some(b.percentage_used(spent)),
                exceeded: b.is_exceeded(spent),
            },
            None => Self {
                category_name,
                spent,
                budget: None,
                remaining: None,
                percentage_used: None,
                exceeded: false,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthlySummaryOutput {
    pub period: MonthPeriod,
    pub total_income: Money,
    /// Expense transactions plus active fixed charges
    pub total_expenses: Money,
    /// Income minus `total_expenses`
    pub net_savings: Money,
    /// Month balance minus active fixed charges
    pub balance: Money,
    /// Sorted by spend, largest first
    pub category_summaries: Vec<CategorySummary>,
    pub budgets: BestEffort<Vec<Budget>>,
    pub total_loans_owed: Money,
    pub active_loans: BestEffort<Vec<Loan>>,
    pub fixed_charges: BestEffort<Vec<FixedCharge>>,
    pub fixed_charges_total: Money,
    pub transactions: Vec<Transaction>,
}

impl MonthlySummaryOutput {
    /// Whether any best-effort lookup failed
    pub fn is_degraded(&self) -> bool {
        self.budgets.is_degraded()
            || self.active_loans.is_degraded()
            || self.fixed_charges.is_degraded()
    }
}

pub struct GetMonthlySummary<'a> {
    transactions: &'a dyn TransactionRepository,
    budgets: &'a dyn BudgetRepository,
    loans: &'a dyn LoanRepository,
    fixed_charges: &'a dyn FixedChargeRepository,
}

impl<'a> GetMonthlySummary<'a> {
    pub fn new(
        transactions: &'a dyn TransactionRepository,
        budgets: &'a dyn BudgetRepository,
        loans: &'a dyn LoanRepository,
        fixed_charges: &'a dyn FixedChargeRepository,
    ) -> Self {
        Self {
            transactions,
            budgets,
            loans,
            fixed_charges,
        }
    }

    pub fn execute(&self, input: MonthlySummaryInput) -> MokaResult<MonthlySummaryOutput> {
        let period = MonthPeriod::new(input.year, input.month)?;

        let transactions = self
            .transactions
            .find_by_month(period.year(), period.month())
            .map_err(|e| MokaError::repository("failed to load transactions for month", e))?;

        let total_income = total_by_kind(&transactions, TransactionKind::Income);
        let transaction_expenses = total_by_kind(&transactions, TransactionKind::Expense);
        let month_balance = balance(&transactions);

        let budgets = BestEffort::capture(
            "budgets",
            self.budgets.find_by_month_and_year(period.month(), period.year()),
        );
        let category_summaries = summarize_categories(&transactions, budgets.as_loaded());

        let active_loans = BestEffort::capture("active loans", self.loans.find_active());
        let total_loans_owed = active_loans.as_loaded().map_or(Money::zero(), |l| total_owed(l));

        let fixed_charges =
            BestEffort::capture("active fixed charges", self.fixed_charges.find_active());
        let fixed_charges_total = fixed_charges
            .as_loaded()
            .map_or(Money::zero(), |c| total_of_active(c));

        let total_expenses = transaction_expenses + fixed_charges_total;
        let net_savings = total_income - total_expenses;
        let balance = month_balance - fixed_charges_total;

        debug!(
            %period,
            transactions = transactions.len(),
            categories = category_summaries.len(),
            "summary computed"
        );
        info!(
            %period,
            income = %total_income,
            expenses = %total_expenses,
            net = %net_savings,
            "monthly summary"
        );

        Ok(MonthlySummaryOutput {
            period,
            total_income,
            total_expenses,
            net_savings,
            balance,
            category_summaries,
            budgets,
            total_loans_owed,
            active_loans,
            fixed_charges,
            fixed_charges_total,
            transactions,
        })
    }
}

fn summarize_categories(
    transactions: &[Transaction],
    budgets: Option<&Vec<Budget>>,
) -> Vec<CategorySummary> {
    let by_name: HashMap<&str, &Budget> = budgets
        .into_iter()
        .flatten()
        .map(|b| (b.category().name(), b))
        .collect();

    let mut summaries: Vec<CategorySummary> = category_totals(transactions)
        .into_iter()
        .map(|(name, spent)| {
            let budget = by_name.get(name.as_str()).copied();
            CategorySummary::new(name, spent, budget)
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.spent
            .cmp(&a.spent)
            .then_with(|| a.category_name.cmp(&b.category_name))
    });
    summaries
}
