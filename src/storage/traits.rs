//! Repository traits
//!
//! One capability set per entity. The use cases only ever see these traits,
//! so any backend (the JSON files, the in-memory store, a test double) can
//! be plugged in. Lookups by id fail with `MokaError::NotFound` when no
//! entity matches.

use chrono::{DateTime, Utc};

use crate::error::MokaResult;
use crate::models::{
    Budget, BudgetId, FixedCharge, FixedChargeId, Loan, LoanId, LoanStatus, MonthPeriod,
    Transaction, TransactionId,
};

/// Persistence for transactions
pub trait TransactionRepository {
    /// Store a new transaction
    fn save(&self, transaction: &Transaction) -> MokaResult<()>;

    fn find_by_id(&self, id: TransactionId) -> MokaResult<Transaction>;

    /// All transactions, most recent first
    fn find_all(&self) -> MokaResult<Vec<Transaction>>;

    /// Transactions with `start <= created_at <= end`, most recent first
    fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> MokaResult<Vec<Transaction>>;

    /// Transactions within one calendar month
    fn find_by_month(&self, year: i32, month: u32) -> MokaResult<Vec<Transaction>> {
        let period = MonthPeriod::new(year, month)?;
        self.find_by_date_range(period.start(), period.end())
    }

    fn delete(&self, id: TransactionId) -> MokaResult<()>;
}

/// Persistence for monthly budgets
pub trait BudgetRepository {
    fn save(&self, budget: &Budget) -> MokaResult<()>;

    fn find_by_id(&self, id: BudgetId) -> MokaResult<Budget>;

    fn find_by_month_and_year(&self, month: u32, year: i32) -> MokaResult<Vec<Budget>>;

    /// The budget for one category in one month; `NotFound` if none is set
    fn find_by_category_and_month(
        &self,
        category_name: &str,
        month: u32,
        year: i32,
    ) -> MokaResult<Budget>;

    /// Replace an existing budget (matched by id)
    fn update(&self, budget: &Budget) -> MokaResult<()>;

    fn delete(&self, id: BudgetId) -> MokaResult<()>;
}

/// Persistence for fixed charges
pub trait FixedChargeRepository {
    fn save(&self, charge: &FixedCharge) -> MokaResult<()>;

    fn find_by_id(&self, id: FixedChargeId) -> MokaResult<FixedCharge>;

    fn find_all(&self) -> MokaResult<Vec<FixedCharge>>;

    fn find_active(&self) -> MokaResult<Vec<FixedCharge>>;

    /// Replace an existing charge (matched by id)
    fn update(&self, charge: &FixedCharge) -> MokaResult<()>;

    fn delete(&self, id: FixedChargeId) -> MokaResult<()>;
}

/// Persistence for loans
pub trait LoanRepository {
    fn save(&self, loan: &Loan) -> MokaResult<()>;

    fn find_by_id(&self, id: LoanId) -> MokaResult<Loan>;

    fn find_all(&self) -> MokaResult<Vec<Loan>>;

    fn find_active(&self) -> MokaResult<Vec<Loan>>;

    fn find_by_status(&self, status: LoanStatus) -> MokaResult<Vec<Loan>>;

    /// Replace an existing loan (matched by id)
    fn update(&self, loan: &Loan) -> MokaResult<()>;

    fn delete(&self, id: LoanId) -> MokaResult<()>;
}
