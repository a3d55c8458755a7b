//! Core data models for Moka
//!
//! This module contains the financial domain: money, categories,
//! transactions, budgets, fixed charges and loans, together with the pure
//! aggregation functions over them.

pub mod budget;
pub mod category;
pub mod fixed_charge;
pub mod ids;
pub mod loan;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, CategoryKind};
pub use fixed_charge::FixedCharge;
pub use ids::{BudgetId, FixedChargeId, LoanId, TransactionId};
pub use loan::{Loan, LoanStatus};
pub use money::{Money, CURRENCY};
pub use period::MonthPeriod;
pub use transaction::{Transaction, TransactionKind};
