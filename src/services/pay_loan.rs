//! Paying back a loan
//!
//! The payment is applied to the loan, the updated loan is stored, and the
//! payment is booked as an expense labelled with the lender. Overpayments
//! are accepted and simply close the loan.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{MokaError, MokaResult};
use crate::models::{Category, Loan, LoanId, Money, Transaction, TransactionKind};
use crate::storage::{LoanRepository, TransactionRepository};

#[derive(Debug, Clone)]
pub struct PayLoanInput {
    /// Loan id as typed by the user, with or without the `loan-` prefix
    pub loan_id: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PayLoanOutput {
    pub loan: Loan,
    pub transaction: Transaction,
    /// Negative after an overpayment
    pub remaining_amount: Money,
    pub fully_paid: bool,
}

pub struct PayLoan<'a> {
    loans: &'a dyn LoanRepository,
    transactions: &'a dyn TransactionRepository,
}

impl<'a> PayLoan<'a> {
    pub fn new(
        loans: &'a dyn LoanRepository,
        transactions: &'a dyn TransactionRepository,
    ) -> Self {
        Self {
            loans,
            transactions,
        }
    }

    pub fn execute(&self, input: PayLoanInput) -> MokaResult<PayLoanOutput> {
        let raw_id = input.loan_id.trim();
        if raw_id.is_empty() {
            return Err(MokaError::invalid_input("loan id cannot be empty"));
        }
        let payment = Money::new(input.amount)?;

        // An id that cannot name any loan is reported like a missing one
        let loan_id: LoanId = raw_id
            .parse()
            .map_err(|_| MokaError::loan_not_found(raw_id))?;

        let loan = self
            .loans
            .find_by_id(loan_id)
            .map_err(|e| MokaError::repository("failed to find loan", e))?;

        let loan = loan.record_payment(payment, input.date);
        self.loans
            .update(&loan)
            .map_err(|e| MokaError::repository("failed to update loan", e))?;

        let category = Category::expense(format!("Loan Payment - {}", loan.lender_name()))?;
        let transaction = Transaction::new(
            payment,
            category,
            format!("Paid {} to {}", payment, loan.lender_name()),
            TransactionKind::Expense,
            input.date,
        );
        self.transactions
            .save(&transaction)
            .map_err(|e| MokaError::repository("failed to save loan payment transaction", e))?;

        let remaining_amount = loan.remaining_amount();
        let fully_paid = loan.is_fully_paid();

        info!(
            loan = %loan.id(),
            payment = %payment,
            remaining = %remaining_amount,
            fully_paid,
            "loan payment recorded"
        );

        Ok(PayLoanOutput {
            loan,
            transaction,
            remaining_amount,
            fully_paid,
        })
    }
}
