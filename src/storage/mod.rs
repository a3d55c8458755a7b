//! Storage layer for Moka
//!
//! Repository traits, JSON file repositories with atomic writes, and an
//! in-memory backend.

pub mod budgets;
pub mod file_io;
pub mod fixed_charges;
pub mod init;
pub mod loans;
pub mod memory;
pub mod traits;
pub mod transactions;

pub use budgets::JsonBudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use fixed_charges::JsonFixedChargeRepository;
pub use init::{initialize_storage, needs_initialization};
pub use loans::JsonLoanRepository;
pub use memory::{
    InMemoryBudgetRepository, InMemoryFixedChargeRepository, InMemoryLoanRepository,
    InMemoryTransactionRepository,
};
pub use traits::{BudgetRepository, FixedChargeRepository, LoanRepository, TransactionRepository};
pub use transactions::JsonTransactionRepository;

use crate::config::paths::MokaPaths;
use crate::error::MokaError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: MokaPaths,
    pub transactions: JsonTransactionRepository,
    pub budgets: JsonBudgetRepository,
    pub fixed_charges: JsonFixedChargeRepository,
    pub loans: JsonLoanRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MokaPaths) -> Result<Self, MokaError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: JsonTransactionRepository::new(paths.transactions_file()),
            budgets: JsonBudgetRepository::new(paths.budgets_file()),
            fixed_charges: JsonFixedChargeRepository::new(paths.fixed_charges_file()),
            loans: JsonLoanRepository::new(paths.loans_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MokaPaths {
        &self.paths
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
