//! Fakes shared by the service tests

use std::cell::Cell;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{MokaError, MokaResult};
use crate::models::{
    Budget, BudgetId, FixedCharge, FixedChargeId, Loan, LoanId, LoanStatus, Transaction,
    TransactionId,
};
use crate::storage::{
    BudgetRepository, FixedChargeRepository, InMemoryBudgetRepository,
    InMemoryFixedChargeRepository, InMemoryLoanRepository, InMemoryTransactionRepository,
    LoanRepository, TransactionRepository,
};

pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap()
}

fn broken() -> MokaError {
    MokaError::Storage("database is locked".into())
}

/// One in-memory repository per entity
#[derive(Default)]
pub struct Ledger {
    pub transactions: InMemoryTransactionRepository,
    pub budgets: InMemoryBudgetRepository,
    pub fixed_charges: InMemoryFixedChargeRepository,
    pub loans: InMemoryLoanRepository,
}

/// Accepts `allowed_saves` saves, then every further save fails
#[derive(Default)]
pub struct FlakyTransactions {
    pub inner: InMemoryTransactionRepository,
    allowed_saves: usize,
    saves: Cell<usize>,
}

impl FlakyTransactions {
    pub fn failing_after(allowed_saves: usize) -> Self {
        Self {
            allowed_saves,
            ..Self::default()
        }
    }
}

impl TransactionRepository for FlakyTransactions {
    fn save(&self, transaction: &Transaction) -> MokaResult<()> {
        if self.saves.get() >= self.allowed_saves {
            return Err(broken());
        }
        self.saves.set(self.saves.get() + 1);
        self.inner.save(transaction)
    }

    fn find_by_id(&self, id: TransactionId) -> MokaResult<Transaction> {
        self.inner.find_by_id(id)
    }

    fn find_all(&self) -> MokaResult<Vec<Transaction>> {
        self.inner.find_all()
    }

    fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> MokaResult<Vec<Transaction>> {
        self.inner.find_by_date_range(start, end)
    }

    fn delete(&self, id: TransactionId) -> MokaResult<()> {
        self.inner.delete(id)
    }
}

/// Transaction store whose reads fail but whose saves succeed
#[derive(Default)]
pub struct WriteOnlyTransactions {
    pub inner: InMemoryTransactionRepository,
}

impl TransactionRepository for WriteOnlyTransactions {
    fn save(&self, transaction: &Transaction) -> MokaResult<()> {
        self.inner.save(transaction)
    }

    fn find_by_id(&self, _id: TransactionId) -> MokaResult<Transaction> {
        Err(broken())
    }

    fn find_all(&self) -> MokaResult<Vec<Transaction>> {
        Err(broken())
    }

    fn find_by_date_range(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> MokaResult<Vec<Transaction>> {
        Err(broken())
    }

    fn delete(&self, _id: TransactionId) -> MokaResult<()> {
        Err(broken())
    }
}

/// Every call fails
pub struct BrokenBudgets;

impl BudgetRepository for BrokenBudgets {
    fn save(&self, _budget: &Budget) -> MokaResult<()> {
        Err(broken())
    }

    fn find_by_id(&self, _id: BudgetId) -> MokaResult<Budget> {
        Err(broken())
    }

    fn find_by_month_and_year(&self, _month: u32, _year: i32) -> MokaResult<Vec<Budget>> {
        Err(broken())
    }

    fn find_by_category_and_month(
        &self,
        _category_name: &str,
        _month: u32,
        _year: i32,
    ) -> MokaResult<Budget> {
        Err(broken())
    }

    fn update(&self, _budget: &Budget) -> MokaResult<()> {
        Err(broken())
    }

    fn delete(&self, _id: BudgetId) -> MokaResult<()> {
        Err(broken())
    }
}

/// Every call fails
pub struct BrokenFixedCharges;

impl FixedChargeRepository for BrokenFixedCharges {
    fn save(&self, _charge: &FixedCharge) -> MokaResult<()> {
        Err(broken())
    }

    fn find_by_id(&self, _id: FixedChargeId) -> MokaResult<FixedCharge> {
        Err(broken())
    }

    fn find_all(&self) -> MokaResult<Vec<FixedCharge>> {
        Err(broken())
    }

    fn find_active(&self) -> MokaResult<Vec<FixedCharge>> {
        Err(broken())
    }

    fn update(&self, _charge: &FixedCharge) -> MokaResult<()> {
        Err(broken())
    }

    fn delete(&self, _id: FixedChargeId) -> MokaResult<()> {
        Err(broken())
    }
}

/// Every call fails
pub struct BrokenLoans;

impl LoanRepository for BrokenLoans {
    fn save(&self, _loan: &Loan) -> MokaResult<()> {
        Err(broken())
    }

    fn find_by_id(&self, _id: LoanId) -> MokaResult<Loan> {
        Err(broken())
    }

    fn find_all(&self) -> MokaResult<Vec<Loan>> {
        Err(broken())
    }

    fn find_active(&self) -> MokaResult<Vec<Loan>> {
        Err(broken())
    }

    fn find_by_status(&self, _status: LoanStatus) -> MokaResult<Vec<Loan>> {
        Err(broken())
    }

    fn update(&self, _loan: &Loan) -> MokaResult<()> {
        Err(broken())
    }

    fn delete(&self, _id: LoanId) -> MokaResult<()> {
        Err(broken())
    }
}
