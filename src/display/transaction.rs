//! Transaction display formatting

use tabled::Tabled;

use super::format::{table, truncate};
use crate::models::{Transaction, TransactionKind};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, date_format: &str) -> Self {
        let amount = match txn.kind() {
            TransactionKind::Income => format!("+{}", txn.amount()),
            TransactionKind::Expense => format!("-{}", txn.amount()),
        };
        Self {
            id: txn.id().short(),
            date: txn.created_at().format(date_format).to_string(),
            category: txn.category().name().to_string(),
            description: truncate(txn.description(), 40),
            amount,
        }
    }
}

/// Format transactions as a register table
pub fn format_transaction_list(transactions: &[Transaction], date_format: &str) -> String {
    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, date_format))
        .collect();
    table(rows, "No transactions found.")
}

/// One-line description of a single transaction
pub fn format_transaction_line(txn: &Transaction, date_format: &str) -> String {
    format!(
        "{} {} {} ({})",
        txn.created_at().format(date_format),
        txn.kind(),
        txn.amount(),
        txn.category()
    )
}
