//! Loan model
//!
//! Money borrowed informally from a person. A loan starts active with
//! nothing paid; each payment produces a new loan value, and once the
//! remaining balance reaches zero (or goes below it) the loan is marked
//! paid back. There is no way back from `PaidBack`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::LoanId;
use super::money::Money;

/// Lifecycle of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    #[default]
    Active,
    PaidBack,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::PaidBack => write!(f, "Paid back"),
        }
    }
}

/// A sum borrowed from a lender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    id: LoanId,
    lender_name: String,
    amount: Money,
    amount_paid: Money,
    borrowed_at: DateTime<Utc>,
    paid_back_at: Option<DateTime<Utc>>,
    status: LoanStatus,
    #[serde(default)]
    description: String,
}

impl Loan {
    /// Create a new active loan with nothing paid yet
    pub fn new(
        lender_name: impl Into<String>,
        amount: Money,
        borrowed_at: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: LoanId::new(),
            lender_name: lender_name.into(),
            amount,
            amount_paid: Money::zero(),
            borrowed_at,
            paid_back_at: None,
            status: LoanStatus::Active,
            description: description.into(),
        }
    }

    pub fn id(&self) -> LoanId {
        self.id
    }

    pub fn lender_name(&self) -> &str {
        &self.lender_name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn amount_paid(&self) -> Money {
        self.amount_paid
    }

    pub fn borrowed_at(&self) -> DateTime<Utc> {
        self.borrowed_at
    }

    pub fn paid_back_at(&self) -> Option<DateTime<Utc>> {
        self.paid_back_at
    }

    pub fn status(&self) -> LoanStatus {
        self.status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Amount minus what has been paid; negative after an overpayment
    pub fn remaining_amount(&self) -> Money {
        self.amount - self.amount_paid
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    pub fn is_fully_paid(&self) -> bool {
        self.status == LoanStatus::PaidBack
    }

    /// Apply a payment, returning the updated loan
    ///
    /// Overpayments are accepted. When the new remaining balance is zero or
    /// negative the loan becomes `PaidBack` stamped with `paid_at`;
    /// otherwise the status is left as it was.
    #[must_use]
    pub fn record_payment(&self, payment: Money, paid_at: DateTime<Utc>) -> Self {
        let amount_paid = self.amount_paid + payment;
        let remaining = self.amount - amount_paid;

        let (status, paid_back_at) = if remaining.is_zero() || remaining.is_negative() {
            (LoanStatus::PaidBack, Some(paid_at))
        } else {
            (self.status, self.paid_back_at)
        };

        Self {
            amount_paid,
            status,
            paid_back_at,
            ..self.clone()
        }
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} ({}, {} remaining)",
            self.amount,
            self.lender_name,
            self.status,
            self.remaining_amount()
        )
    }
}

/// Total still owed across active loans; paid-back loans count as zero
pub fn total_owed(loans: &[Loan]) -> Money {
    loans
        .iter()
        .filter(|loan| loan.is_active())
        .map(Loan::remaining_amount)
        .sum()
}

/// The active subset, in input order
pub fn filter_active(loans: &[Loan]) -> Vec<Loan> {
    loans.iter().filter(|loan| loan.is_active()).cloned().collect()
}

/// Loans from one lender (exact name match)
pub fn filter_by_lender(loans: &[Loan], lender_name: &str) -> Vec<Loan> {
    loans
        .iter()
        .filter(|loan| loan.lender_name == lender_name)
        .cloned()
        .collect()
}
