//! Borrowing money
//!
//! Creates an active loan and books the borrowed amount as income. The loan
//! is written first; if the income transaction then fails, the loan stays.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{MokaError, MokaResult};
use crate::models::{Category, Loan, Money, Transaction, TransactionKind};
use crate::storage::{LoanRepository, TransactionRepository};

#[derive(Debug, Clone)]
pub struct BorrowMoneyInput {
    pub lender_name: String,
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BorrowMoneyOutput {
    pub loan: Loan,
    pub transaction: Transaction,
}

pub struct BorrowMoney<'a> {
    loans: &'a dyn LoanRepository,
    transactions: &'a dyn TransactionRepository,
}

impl<'a> BorrowMoney<'a> {
    pub fn new(
        loans: &'a dyn LoanRepository,
        transactions: &'a dyn TransactionRepository,
    ) -> Self {
        Self {
            loans,
            transactions,
        }
    }

    pub fn execute(&self, input: BorrowMoneyInput) -> MokaResult<BorrowMoneyOutput> {
        let lender_name = input.lender_name.trim();
        if lender_name.is_empty() {
            return Err(MokaError::invalid_input("lender name cannot be empty"));
        }
        if input.description.trim().is_empty() {
            return Err(MokaError::invalid_input("description cannot be empty"));
        }
        let amount = Money::new(input.amount)?;

        let loan = Loan::new(lender_name, amount, input.date, input.description.as_str());
        self.loans
            .save(&loan)
            .map_err(|e| MokaError::repository("failed to save loan", e))?;

        let transaction = Transaction::new(
            amount,
            Category::BORROWED,
            format!("Borrowed from {}: {}", lender_name, input.description),
            TransactionKind::Income,
            input.date,
        );
        self.transactions
            .save(&transaction)
            .map_err(|e| MokaError::repository("failed to save borrowing transaction", e))?;

        info!(loan = %loan.id(), lender = lender_name, amount = %amount, "money borrowed");

        Ok(BorrowMoneyOutput { loan, transaction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoanStatus;
    use crate::services::testing::{day, BrokenLoans, FlakyTransactions, Ledger};
    use crate::storage::{LoanRepository, TransactionRepository};

    fn input(lender: &str, amount: f64) -> BorrowMoneyInput {
        BorrowMoneyInput {
            lender_name: lender.into(),
            amount,
            description: "rent gap".into(),
            date: day(2025, 5, 10),
        }
    }

    #[test]
    fn test_borrow_creates_loan_and_income() {
        let ledger = Ledger::default();
        let use_case = BorrowMoney::new(&ledger.loans, &ledger.transactions);

        let output = use_case.execute(input("Hamza", 800.0)).unwrap();

        assert_eq!(output.loan.amount().cents(), 80_000);
        assert!(output.loan.amount_paid().is_zero());
        assert_eq!(output.loan.status(), LoanStatus::Active);
        assert_eq!(output.loan.lender_name(), "Hamza");
        assert_eq!(output.loan.borrowed_at(), day(2025, 5, 10));

        assert!(output.transaction.is_income());
        assert_eq!(output.transaction.category(), &Category::BORROWED);
        assert_eq!(output.transaction.amount(), output.loan.amount());
        assert_eq!(output.transaction.description(), "Borrowed from Hamza: rent gap");

        assert_eq!(ledger.loans.find_active().unwrap().len(), 1);
        assert_eq!(ledger.transactions.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_validation() {
        let ledger = Ledger::default();
        let use_case = BorrowMoney::new(&ledger.loans, &ledger.transactions);

        assert!(use_case.execute(input("", 800.0)).unwrap_err().is_invalid_input());
        assert!(use_case.execute(input("Hamza", -1.0)).unwrap_err().is_invalid_input());

        let mut blank = input("Hamza", 800.0);
        blank.description = " ".into();
        assert!(use_case.execute(blank).unwrap_err().is_invalid_input());

        assert!(ledger.loans.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_loan_save_failure_stops_before_transaction() {
        let ledger = Ledger::default();
        let use_case = BorrowMoney::new(&BrokenLoans, &ledger.transactions);

        let err = use_case.execute(input("Hamza", 800.0)).unwrap_err();

        assert!(err.is_repository_failure());
        assert!(ledger.transactions.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_transaction_failure_leaves_loan_in_place() {
        let ledger = Ledger::default();
        let transactions = FlakyTransactions::failing_after(0);
        let use_case = BorrowMoney::new(&ledger.loans, &transactions);

        let err = use_case.execute(input("Hamza", 800.0)).unwrap_err();

        assert!(err.is_repository_failure());
        assert_eq!(ledger.loans.find_all().unwrap().len(), 1);
    }
}
