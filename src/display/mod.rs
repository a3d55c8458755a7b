//! Display formatting for terminal output
//!
//! Formats models and use-case results for the terminal. Lists are rendered
//! as tables with `tabled`; everything returns a `String` so the CLI
//! decides where it goes.

pub mod budget;
pub mod fixed_charge;
pub mod format;
pub mod loan;
pub mod outcome;
pub mod summary;
pub mod transaction;

pub use budget::format_budget_list;
pub use fixed_charge::format_fixed_charge_list;
pub use loan::{format_loan_details, format_loan_list};
pub use outcome::{
    format_expense_recorded, format_loan_paid, format_money_borrowed, format_salary_recorded,
};
pub use summary::format_monthly_summary;
pub use transaction::{format_transaction_line, format_transaction_list};
