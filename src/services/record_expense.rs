//! Recording an expense
//!
//! The expense is always saved. Budget tracking is layered on afterwards
//! and never fails the call: the output says whether a budget was found,
//! absent, or could not be checked.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{MokaError, MokaResult};
use crate::models::transaction::total_by_kind;
use crate::models::{Budget, Category, Money, MonthPeriod, Transaction, TransactionKind};
use crate::storage::{BudgetRepository, TransactionRepository};

#[derive(Debug, Clone)]
pub struct RecordExpenseInput {
    pub amount: f64,
    pub category_name: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// How the category's budget stands after this expense
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverlay {
    pub budget: Budget,
    /// Month-to-date spend in the category, this expense included
    pub spent: Money,
    pub remaining: Money,
    pub percentage_used: f64,
    pub exceeded: bool,
}

/// Budget tracking outcome attached to a recorded expense
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetTracking {
    Tracked(BudgetOverlay),
    /// No budget is set for this category and month
    NotConfigured,
    /// The budget or the month's spend could not be read
    Unavailable { reason: String },
}

impl BudgetTracking {
    pub fn overlay(&self) -> Option<&BudgetOverlay> {
        match self {
            Self::Tracked(overlay) => Some(overlay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordExpenseOutput {
    pub transaction: Transaction,
    pub budget: BudgetTracking,
}

pub struct RecordExpense<'a> {
    transactions: &'a dyn TransactionRepository,
    budgets: &'a dyn BudgetRepository,
}

impl<'a> RecordExpense<'a> {
    pub fn new(
        transactions: &'a dyn TransactionRepository,
        budgets: &'a dyn BudgetRepository,
    ) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    pub fn execute(&self, input: RecordExpenseInput) -> MokaResult<RecordExpenseOutput> {
        if input.category_name.trim().is_empty() {
            return Err(MokaError::invalid_input("category name cannot be empty"));
        }
        if input.description.trim().is_empty() {
            return Err(MokaError::invalid_input("description cannot be empty"));
        }
        let category = Category::expense(input.category_name.trim())?;
        let amount = Money::new(input.amount)?;

        let transaction = Transaction::new(
            amount,
            category,
            input.description,
            TransactionKind::Expense,
            input.date,
        );
        self.transactions
            .save(&transaction)
            .map_err(|e| MokaError::repository("failed to save expense transaction", e))?;

        info!(
            amount = %amount,
            category = transaction.category().name(),
            "expense recorded"
        );

        let budget = self.track_budget(&transaction);

        Ok(RecordExpenseOutput {
            transaction,
            budget,
        })
    }

    fn track_budget(&self, transaction: &Transaction) -> BudgetTracking {
        let category_name = transaction.category().name();
        let period = MonthPeriod::containing(transaction.created_at());

        let budget = match self.budgets.find_by_category_and_month(
            category_name,
            period.month(),
            period.year(),
        ) {
            Ok(budget) => budget,
            Err(err) if err.is_not_found() => {
                debug!(category = category_name, %period, "no budget configured");
                return BudgetTracking::NotConfigured;
            }
            Err(err) => return unavailable("budget lookup", err),
        };

        let month_transactions = match self
            .transactions
            .find_by_date_range(period.start(), period.end())
        {
            Ok(transactions) => transactions,
            Err(err) => return unavailable("month spend lookup", err),
        };

        let in_category: Vec<Transaction> = month_transactions
            .into_iter()
            .filter(|t| t.category().name() == category_name && t.is_expense())
            .collect();
        let spent = total_by_kind(&in_category, TransactionKind::Expense);

        debug!(
            category = category_name,
            %period,
            spent = %spent,
            limit = %budget.limit(),
            "budget tracked"
        );

        BudgetTracking::Tracked(BudgetOverlay {
            spent,
            remaining: budget.remaining_amount(spent),
            percentage_used: budget.percentage_used(spent),
            exceeded: budget.is_exceeded(spent),
            budget,
        })
    }
}

fn unavailable(lookup: &str, err: MokaError) -> BudgetTracking {
    warn!(lookup, error = %err, "budget tracking skipped");
    BudgetTracking::Unavailable {
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{day, BrokenBudgets, Ledger, WriteOnlyTransactions};
    use crate::storage::{BudgetRepository, TransactionRepository};

    fn input(amount: f64, category: &str, date: DateTime<Utc>) -> RecordExpenseInput {
        RecordExpenseInput {
            amount,
            category_name: category.into(),
            description: "spent".into(),
            date,
        }
    }

    fn set_budget(ledger: &Ledger, category: Category, cents: i64, month: u32) {
        ledger
            .budgets
            .save(&Budget::new(category, Money::from_cents(cents), month, 2025).unwrap())
            .unwrap();
    }

    #[test]
    fn test_expense_without_budget() {
        let ledger = Ledger::default();
        let use_case = RecordExpense::new(&ledger.transactions, &ledger.budgets);

        let output = use_case.execute(input(45.5, "Food", day(2025, 5, 3))).unwrap();

        assert_eq!(output.transaction.amount().cents(), 4550);
        assert!(output.transaction.is_expense());
        assert_eq!(output.budget, BudgetTracking::NotConfigured);
        assert!(output.budget.overlay().is_none());
        assert_eq!(ledger.transactions.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_budget_overlay_counts_month_spend() {
        let ledger = Ledger::default();
        set_budget(&ledger, Category::FOOD, 100_000, 5);
        let use_case = RecordExpense::new(&ledger.transactions, &ledger.budgets);

        use_case.execute(input(300.0, "Food", day(2025, 5, 2))).unwrap();
        // other category, other month: neither counts
        use_case.execute(input(50.0, "Transport", day(2025, 5, 2))).unwrap();
        use_case.execute(input(999.0, "Food", day(2025, 4, 30))).unwrap();

        let output = use_case.execute(input(200.0, "Food", day(2025, 5, 20))).unwrap();
        let overlay = output.budget.overlay().unwrap();

        assert_eq!(overlay.spent.cents(), 50_000);
        assert_eq!(overlay.remaining.cents(), 50_000);
        assert!((overlay.percentage_used - 50.0).abs() < f64::EPSILON);
        assert!(!overlay.exceeded);
        assert_eq!(overlay.budget.limit().cents(), 100_000);
    }

    #[test]
    fn test_budget_overrun() {
        let ledger = Ledger::default();
        set_budget(&ledger, Category::FOOD, 10_000, 5);
        let use_case = RecordExpense::new(&ledger.transactions, &ledger.budgets);

        let output = use_case.execute(input(150.0, "Food", day(2025, 5, 2))).unwrap();
        let overlay = output.budget.overlay().unwrap();

        assert!(overlay.exceeded);
        assert_eq!(overlay.remaining.cents(), -5_000);
        assert!((overlay.percentage_used - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_income_in_category_is_ignored_by_overlay() {
        let ledger = Ledger::default();
        set_budget(&ledger, Category::FOOD, 100_000, 5);
        ledger
            .transactions
            .save(&Transaction::new(
                Money::from_cents(70_000),
                Category::FOOD,
                "refund",
                TransactionKind::Income,
                day(2025, 5, 1),
            ))
            .unwrap();
        let use_case = RecordExpense::new(&ledger.transactions, &ledger.budgets);

        let output = use_case.execute(input(100.0, "Food", day(2025, 5, 2))).unwrap();

        assert_eq!(output.budget.overlay().unwrap().spent.cents(), 10_000);
    }

    #[test]
    fn test_broken_budget_store_still_records() {
        let ledger = Ledger::default();
        let use_case = RecordExpense::new(&ledger.transactions, &BrokenBudgets);

        let output = use_case.execute(input(10.0, "Food", day(2025, 5, 2))).unwrap();

        assert!(matches!(output.budget, BudgetTracking::Unavailable { .. }));
        assert_eq!(ledger.transactions.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_unreadable_month_degrades() {
        let ledger = Ledger::default();
        set_budget(&ledger, Category::FOOD, 100_000, 5);
        let transactions = WriteOnlyTransactions::default();
        let use_case = RecordExpense::new(&transactions, &ledger.budgets);

        let output = use_case.execute(input(10.0, "Food", day(2025, 5, 2))).unwrap();

        match output.budget {
            BudgetTracking::Unavailable { reason } => assert!(reason.contains("locked")),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_validation() {
        let ledger = Ledger::default();
        let use_case = RecordExpense::new(&ledger.transactions, &ledger.budgets);

        assert!(use_case
            .execute(input(10.0, "", day(2025, 5, 2)))
            .unwrap_err()
            .is_invalid_input());

        let mut no_description = input(10.0, "Food", day(2025, 5, 2));
        no_description.description = String::new();
        assert!(use_case.execute(no_description).unwrap_err().is_invalid_input());

        assert!(use_case
            .execute(input(0.0, "Food", day(2025, 5, 2)))
            .unwrap_err()
            .is_invalid_input());

        assert!(ledger.transactions.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_free_form_category() {
        let ledger = Ledger::default();
        let use_case = RecordExpense::new(&ledger.transactions, &ledger.budgets);

        let output = use_case
            .execute(input(12.0, "Coffee", day(2025, 5, 2)))
            .unwrap();

        assert_eq!(output.transaction.category().name(), "Coffee");
        assert!(output.transaction.category().is_expense());
    }

    #[test]
    fn test_category_name_is_trimmed_before_budget_lookup() {
        let ledger = Ledger::default();
        crate::services::BudgetService::new(&ledger.budgets)
            .set_budget("Food ", 1000.0, MonthPeriod::new(2025, 5).unwrap())
            .unwrap();
        let use_case = RecordExpense::new(&ledger.transactions, &ledger.budgets);

        let output = use_case
            .execute(input(100.0, " Food ", day(2025, 5, 4)))
            .unwrap();

        assert_eq!(output.transaction.category().name(), "Food");
        let overlay = output.budget.overlay().unwrap();
        assert_eq!(overlay.spent.cents(), 10_000);
        assert_eq!(overlay.remaining.cents(), 90_000);
    }
}
