//! Transaction model
//!
//! An immutable record of a single money movement, plus the pure
//! aggregation functions the use cases and the monthly summary build on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single recorded money movement
///
/// `kind` and `category.kind()` are set independently by the caller and are
/// not checked against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    category: Category,
    description: String,
    kind: TransactionKind,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction with a fresh ID
    pub fn new(
        amount: Money,
        category: Category,
        description: impl Into<String>,
        kind: TransactionKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::with_id(
            TransactionId::new(),
            amount,
            category,
            description,
            kind,
            created_at,
        )
    }

    /// Create a transaction with a known ID
    pub fn with_id(
        id: TransactionId,
        amount: Money,
        category: Category,
        description: impl Into<String>,
        kind: TransactionKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            description: description.into(),
            kind,
            created_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.created_at.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

/// Net balance: income adds, expense subtracts
pub fn balance(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .map(|tx| match tx.kind {
            TransactionKind::Income => tx.amount,
            TransactionKind::Expense => -tx.amount,
        })
        .sum()
}

/// Sum of amounts for transactions of the given kind
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .map(|tx| tx.amount)
        .sum()
}

/// Group transactions by category name
pub fn group_by_category(transactions: &[Transaction]) -> HashMap<String, Vec<Transaction>> {
    let mut grouped: HashMap<String, Vec<Transaction>> = HashMap::new();
    for tx in transactions {
        grouped
            .entry(tx.category.name().to_string())
            .or_default()
            .push(tx.clone());
    }
    grouped
}

/// Spend per category name, counting expense transactions only
pub fn category_totals(transactions: &[Transaction]) -> HashMap<String, Money> {
    let mut totals: HashMap<String, Money> = HashMap::new();
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        *totals.entry(tx.category.name().to_string()).or_default() += tx.amount;
    }
    totals
}

/// Transactions whose `created_at` lies in `[start, end]`
pub fn filter_by_range(
    transactions: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.created_at >= start && tx.created_at <= end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKind;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, day, 12, 0, 0).unwrap()
    }

    fn income(cents: i64, day: u32) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            Category::SALARY,
            "salary",
            TransactionKind::Income,
            at(day),
        )
    }

    fn expense(cents: i64, category: Category, day: u32) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            category,
            "spent",
            TransactionKind::Expense,
            at(day),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            income(500_000, 1),
            expense(12_000, Category::FOOD, 3),
            expense(3_000, Category::FOOD, 10),
            expense(20_000, Category::TRANSPORT, 15),
            income(80_000, 20),
        ]
    }

    #[test]
    fn test_balance() {
        assert_eq!(balance(&sample()).cents(), 580_000 - 35_000);
        assert_eq!(balance(&[]), Money::zero());
    }

    #[test]
    fn test_balance_matches_kind_totals() {
        let lists = vec![
            sample(),
            vec![],
            vec![expense(100, Category::OTHER, 2)],
            vec![income(1, 1), income(2, 2)],
        ];
        for txs in lists {
            assert_eq!(
                balance(&txs),
                total_by_kind(&txs, TransactionKind::Income)
                    - total_by_kind(&txs, TransactionKind::Expense)
            );
        }
    }

    #[test]
    fn test_total_by_kind() {
        let txs = sample();
        assert_eq!(total_by_kind(&txs, TransactionKind::Income).cents(), 580_000);
        assert_eq!(total_by_kind(&txs, TransactionKind::Expense).cents(), 35_000);
    }

    #[test]
    fn test_group_by_category() {
        let grouped = group_by_category(&sample());
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped["Food"].len(), 2);
        assert_eq!(grouped["Salary"].len(), 2);
        assert_eq!(grouped["Transport"].len(), 1);
    }

    #[test]
    fn test_category_totals_only_count_expenses() {
        let totals = category_totals(&sample());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Food"].cents(), 15_000);
        assert_eq!(totals["Transport"].cents(), 20_000);
        assert!(!totals.contains_key("Salary"));
    }

    #[test]
    fn test_filter_by_range_is_inclusive() {
        let txs = sample();
        let filtered = filter_by_range(&txs, at(3), at(15));
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|tx| tx.is_expense()));

        assert!(filter_by_range(&txs, at(4), at(9)).is_empty());
    }

    #[test]
    fn test_kind_and_category_kind_are_not_cross_checked() {
        // An income-tagged transaction in an expense category is accepted as-is.
        let tx = Transaction::new(
            Money::from_cents(100),
            Category::new("Refund", CategoryKind::Expense).unwrap(),
            "mismatch",
            TransactionKind::Income,
            at(1),
        );
        assert!(tx.is_income());
        assert!(tx.category().is_expense());
        assert_eq!(balance(&[tx.clone()]).cents(), 100);
        assert!(category_totals(&[tx]).is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let tx = expense(4_250, Category::HEALTH, 7);
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }
}
