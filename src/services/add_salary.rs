//! Recording a salary
//!
//! A salary is stored as one income transaction. Every active fixed charge
//! is then deducted as its own expense transaction on the same date.
//!
//! The writes are not atomic. If a charge fails to save, the salary and any
//! charges saved before it stay in storage and the error is returned.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{MokaError, MokaResult};
use crate::models::fixed_charge::total_of_active;
use crate::models::{Category, FixedCharge, Money, Transaction, TransactionKind};
use crate::storage::{FixedChargeRepository, TransactionRepository};

#[derive(Debug, Clone)]
pub struct AddSalaryInput {
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AddSalaryOutput {
    pub salary_transaction: Transaction,
    /// The active charges that were deducted
    pub fixed_charges: Vec<FixedCharge>,
    pub fixed_charges_total: Money,
    /// Salary minus the charges; negative when charges exceed the salary
    pub net_amount: Money,
    pub charge_transactions: Vec<Transaction>,
}

pub struct AddSalary<'a> {
    transactions: &'a dyn TransactionRepository,
    fixed_charges: &'a dyn FixedChargeRepository,
}

impl<'a> AddSalary<'a> {
    pub fn new(
        transactions: &'a dyn TransactionRepository,
        fixed_charges: &'a dyn FixedChargeRepository,
    ) -> Self {
        Self {
            transactions,
            fixed_charges,
        }
    }

    pub fn execute(&self, input: AddSalaryInput) -> MokaResult<AddSalaryOutput> {
        if input.description.trim().is_empty() {
            return Err(MokaError::invalid_input("description cannot be empty"));
        }
        let amount = Money::new(input.amount)?;

        let salary_transaction = Transaction::new(
            amount,
            Category::SALARY,
            input.description,
            TransactionKind::Income,
            input.date,
        );
        self.transactions
            .save(&salary_transaction)
            .map_err(|e| MokaError::repository("failed to save salary transaction", e))?;

        let fixed_charges = self
            .fixed_charges
            .find_active()
            .map_err(|e| MokaError::repository("failed to load active fixed charges", e))?;
        let fixed_charges_total = total_of_active(&fixed_charges);

        let mut charge_transactions = Vec::with_capacity(fixed_charges.len());
        for charge in &fixed_charges {
            // Stored charges are not re-validated on load
            let category = Category::expense(charge.name()).map_err(|e| {
                MokaError::repository(format!("fixed charge {} has no usable name", charge.id()), e)
            })?;
            let charge_transaction = Transaction::new(
                charge.amount(),
                category,
                format!("Fixed charge: {}", charge.description()),
                TransactionKind::Expense,
                input.date,
            );
            self.transactions.save(&charge_transaction).map_err(|e| {
                MokaError::repository(
                    format!("failed to save fixed charge transaction for {}", charge.name()),
                    e,
                )
            })?;
            charge_transactions.push(charge_transaction);
        }

        let net_amount = amount - fixed_charges_total;

        info!(
            salary = %amount,
            charges = charge_transactions.len(),
            charges_total = %fixed_charges_total,
            net = %net_amount,
            "salary recorded"
        );

        Ok(AddSalaryOutput {
            salary_transaction,
            fixed_charges,
            fixed_charges_total,
            net_amount,
            charge_transactions,
        })
    }
}
