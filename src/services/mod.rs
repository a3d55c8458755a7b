//! Service layer for Moka
//!
//! The use cases (salary, expense, borrowing, loan payment, monthly
//! summary) and the management services behind the CLI. Everything here
//! works against the repository traits, never a concrete backend.

pub mod add_salary;
pub mod best_effort;
pub mod borrow_money;
pub mod budget;
pub mod fixed_charge;
pub mod listing;
pub mod monthly_summary;
pub mod pay_loan;
pub mod record_expense;

#[cfg(test)]
pub(crate) mod testing;

pub use add_salary::{AddSalary, AddSalaryInput, AddSalaryOutput};
pub use best_effort::BestEffort;
pub use borrow_money::{BorrowMoney, BorrowMoneyInput, BorrowMoneyOutput};
pub use budget::BudgetService;
pub use fixed_charge::FixedChargeService;
pub use listing::LoanFilter;
pub use monthly_summary::{
    CategorySummary, GetMonthlySummary, MonthlySummaryInput, MonthlySummaryOutput,
};
pub use pay_loan::{PayLoan, PayLoanInput, PayLoanOutput};
pub use record_expense::{
    BudgetOverlay, BudgetTracking, RecordExpense, RecordExpenseInput, RecordExpenseOutput,
};
