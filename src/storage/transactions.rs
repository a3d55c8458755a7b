//! Transaction repository for JSON storage
//!
//! Every call reads `transactions.json` afresh; writes replace the whole
//! document atomically.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{MokaError, MokaResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::traits::TransactionRepository;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Transaction repository backed by a JSON file
pub struct JsonTransactionRepository {
    path: PathBuf,
}

impl JsonTransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> MokaResult<Vec<Transaction>> {
        let data: TransactionData = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            count = data.transactions.len(),
            "loaded transactions"
        );
        Ok(data.transactions)
    }

    fn store(&self, mut transactions: Vec<Transaction>) -> MokaResult<()> {
        sort_newest_first(&mut transactions);
        write_json_atomic(&self.path, &TransactionData { transactions })
    }
}

fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

impl TransactionRepository for JsonTransactionRepository {
    fn save(&self, transaction: &Transaction) -> MokaResult<()> {
        let mut transactions = self.load()?;
        if transactions.iter().any(|t| t.id() == transaction.id()) {
            return Err(MokaError::Storage(format!(
                "transaction {} already exists",
                transaction.id()
            )));
        }
        transactions.push(transaction.clone());
        self.store(transactions)
    }

    fn find_by_id(&self, id: TransactionId) -> MokaResult<Transaction> {
        self.load()?
            .into_iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| MokaError::transaction_not_found(id.to_string()))
    }

    fn find_all(&self) -> MokaResult<Vec<Transaction>> {
        let mut transactions = self.load()?;
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> MokaResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .load()?
            .into_iter()
            .filter(|t| t.created_at() >= start && t.created_at() <= end)
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    fn delete(&self, id: TransactionId) -> MokaResult<()> {
        let mut transactions = self.load()?;
        let before = transactions.len();
        transactions.retain(|t| t.id() != id);
        if transactions.len() == before {
            return Err(MokaError::transaction_not_found(id.to_string()));
        }
        self.store(transactions)
    }
}
