//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod dates;
pub mod fixed_charge;
pub mod ledger;
pub mod loan;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use fixed_charge::{handle_fixed_charge_command, FixedChargeCommands};
pub use ledger::{
    handle_expense_command, handle_salary_command, handle_summary_command, ExpenseArgs,
    SalaryArgs, SummaryArgs,
};
pub use loan::{handle_loan_command, LoanCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
