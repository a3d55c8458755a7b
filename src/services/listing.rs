//! Read-only listings for the CLI

use crate::error::{MokaError, MokaResult};
use crate::models::{Loan, LoanStatus, MonthPeriod, Transaction};
use crate::storage::{LoanRepository, TransactionRepository};

/// Which loans to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanFilter {
    #[default]
    All,
    Active,
    Status(LoanStatus),
}

/// Transactions in one month, most recent first
pub fn transactions_for_month(
    repository: &dyn TransactionRepository,
    period: MonthPeriod,
) -> MokaResult<Vec<Transaction>> {
    repository
        .find_by_month(period.year(), period.month())
        .map_err(|e| MokaError::repository(format!("failed to list transactions for {}", period), e))
}

/// Every transaction, most recent first
pub fn all_transactions(repository: &dyn TransactionRepository) -> MokaResult<Vec<Transaction>> {
    repository
        .find_all()
        .map_err(|e| MokaError::repository("failed to list transactions", e))
}

pub fn loans(repository: &dyn LoanRepository, filter: LoanFilter) -> MokaResult<Vec<Loan>> {
    let result = match filter {
        LoanFilter::All => repository.find_all(),
        LoanFilter::Active => repository.find_active(),
        LoanFilter::Status(status) => repository.find_by_status(status),
    };
    result.map_err(|e| MokaError::repository("failed to list loans", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::testing::{day, Ledger};

    #[test]
    fn test_loan_filters() {
        let ledger = Ledger::default();
        let open = Loan::new("Hamza", Money::from_cents(100), day(2025, 5, 1), "");
        let closed = Loan::new("Younes", Money::from_cents(100), day(2025, 5, 2), "")
            .record_payment(Money::from_cents(100), day(2025, 5, 3));
        ledger.loans.save(&open).unwrap();
        ledger.loans.save(&closed).unwrap();

        assert_eq!(loans(&ledger.loans, LoanFilter::All).unwrap().len(), 2);
        assert_eq!(loans(&ledger.loans, LoanFilter::Active).unwrap(), vec![open]);
        assert_eq!(
            loans(&ledger.loans, LoanFilter::Status(LoanStatus::PaidBack)).unwrap(),
            vec![closed]
        );
    }

    #[test]
    fn test_transactions_for_month_is_empty_without_data() {
        let ledger = Ledger::default();
        let period = MonthPeriod::new(2025, 5).unwrap();
        assert!(transactions_for_month(&ledger.transactions, period)
            .unwrap()
            .is_empty());
        assert!(all_transactions(&ledger.transactions).unwrap().is_empty());
    }
}
