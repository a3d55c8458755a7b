//! In-memory repositories
//!
//! Same contracts as the JSON repositories, without touching disk. Used by
//! the service tests and handy for embedding the ledger elsewhere.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::error::{MokaError, MokaResult};
use crate::models::{
    Budget, BudgetId, FixedCharge, FixedChargeId, Loan, LoanId, LoanStatus, Transaction,
    TransactionId,
};

use super::traits::{
    BudgetRepository, FixedChargeRepository, LoanRepository, TransactionRepository,
};

fn lock<T>(mutex: &Mutex<Vec<T>>) -> MokaResult<MutexGuard<'_, Vec<T>>> {
    mutex
        .lock()
        .map_err(|_| MokaError::Storage("in-memory store lock poisoned".into()))
}

#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    items: Mutex<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn save(&self, transaction: &Transaction) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        if items.iter().any(|t| t.id() == transaction.id()) {
            return Err(MokaError::Storage(format!(
                "transaction {} already exists",
                transaction.id()
            )));
        }
        items.push(transaction.clone());
        Ok(())
    }

    fn find_by_id(&self, id: TransactionId) -> MokaResult<Transaction> {
        lock(&self.items)?
            .iter()
            .find(|t| t.id() == id)
            .cloned()
            .ok_or_else(|| MokaError::transaction_not_found(id.to_string()))
    }

    fn find_all(&self) -> MokaResult<Vec<Transaction>> {
        let mut all = lock(&self.items)?.clone();
        all.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(all)
    }

    fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> MokaResult<Vec<Transaction>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|t| t.created_at() >= start && t.created_at() <= end)
            .collect())
    }

    fn delete(&self, id: TransactionId) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        let before = items.len();
        items.retain(|t| t.id() != id);
        if items.len() == before {
            return Err(MokaError::transaction_not_found(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryBudgetRepository {
    items: Mutex<Vec<Budget>>,
}

impl InMemoryBudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetRepository for InMemoryBudgetRepository {
    fn save(&self, budget: &Budget) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        if items.iter().any(|b| b.id() == budget.id()) {
            return Err(MokaError::Storage(format!(
                "budget {} already exists",
                budget.id()
            )));
        }
        items.push(budget.clone());
        Ok(())
    }

    fn find_by_id(&self, id: BudgetId) -> MokaResult<Budget> {
        lock(&self.items)?
            .iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| MokaError::budget_not_found(id.to_string()))
    }

    fn find_by_month_and_year(&self, month: u32, year: i32) -> MokaResult<Vec<Budget>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|b| b.month() == month && b.year() == year)
            .cloned()
            .collect())
    }

    fn find_by_category_and_month(
        &self,
        category_name: &str,
        month: u32,
        year: i32,
    ) -> MokaResult<Budget> {
        lock(&self.items)?
            .iter()
            .find(|b| b.matches(category_name, month, year))
            .cloned()
            .ok_or_else(|| {
                MokaError::budget_not_found(format!("{} {}-{:02}", category_name, year, month))
            })
    }

    fn update(&self, budget: &Budget) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        let slot = items
            .iter_mut()
            .find(|b| b.id() == budget.id())
            .ok_or_else(|| MokaError::budget_not_found(budget.id().to_string()))?;
        *slot = budget.clone();
        Ok(())
    }

    fn delete(&self, id: BudgetId) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        let before = items.len();
        items.retain(|b| b.id() != id);
        if items.len() == before {
            return Err(MokaError::budget_not_found(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFixedChargeRepository {
    items: Mutex<Vec<FixedCharge>>,
}

impl InMemoryFixedChargeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FixedChargeRepository for InMemoryFixedChargeRepository {
    fn save(&self, charge: &FixedCharge) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        if items.iter().any(|c| c.id() == charge.id()) {
            return Err(MokaError::Storage(format!(
                "fixed charge {} already exists",
                charge.id()
            )));
        }
        items.push(charge.clone());
        Ok(())
    }

    fn find_by_id(&self, id: FixedChargeId) -> MokaResult<FixedCharge> {
        lock(&self.items)?
            .iter()
            .find(|c| c.id() == id)
            .cloned()
            .ok_or_else(|| MokaError::fixed_charge_not_found(id.to_string()))
    }

    fn find_all(&self) -> MokaResult<Vec<FixedCharge>> {
        Ok(lock(&self.items)?.clone())
    }

    fn find_active(&self) -> MokaResult<Vec<FixedCharge>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect())
    }

    fn update(&self, charge: &FixedCharge) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        let slot = items
            .iter_mut()
            .find(|c| c.id() == charge.id())
            .ok_or_else(|| MokaError::fixed_charge_not_found(charge.id().to_string()))?;
        *slot = charge.clone();
        Ok(())
    }

    fn delete(&self, id: FixedChargeId) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        let before = items.len();
        items.retain(|c| c.id() != id);
        if items.len() == before {
            return Err(MokaError::fixed_charge_not_found(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryLoanRepository {
    items: Mutex<Vec<Loan>>,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoanRepository for InMemoryLoanRepository {
    fn save(&self, loan: &Loan) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        if items.iter().any(|l| l.id() == loan.id()) {
            return Err(MokaError::Storage(format!("loan {} already exists", loan.id())));
        }
        items.push(loan.clone());
        Ok(())
    }

    fn find_by_id(&self, id: LoanId) -> MokaResult<Loan> {
        lock(&self.items)?
            .iter()
            .find(|l| l.id() == id)
            .cloned()
            .ok_or_else(|| MokaError::loan_not_found(id.to_string()))
    }

    fn find_all(&self) -> MokaResult<Vec<Loan>> {
        let mut all = lock(&self.items)?.clone();
        all.sort_by(|a, b| b.borrowed_at().cmp(&a.borrowed_at()));
        Ok(all)
    }

    fn find_active(&self) -> MokaResult<Vec<Loan>> {
        self.find_by_status(LoanStatus::Active)
    }

    fn find_by_status(&self, status: LoanStatus) -> MokaResult<Vec<Loan>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|l| l.status() == status)
            .collect())
    }

    fn update(&self, loan: &Loan) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        let slot = items
            .iter_mut()
            .find(|l| l.id() == loan.id())
            .ok_or_else(|| MokaError::loan_not_found(loan.id().to_string()))?;
        *slot = loan.clone();
        Ok(())
    }

    fn delete(&self, id: LoanId) -> MokaResult<()> {
        let mut items = lock(&self.items)?;
        let before = items.len();
        items.retain(|l| l.id() != id);
        if items.len() == before {
            return Err(MokaError::loan_not_found(id.to_string()));
        }
        Ok(())
    }
}
