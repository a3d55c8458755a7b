//! Messages printed after a command changes the ledger

use super::format::format_percentage;
use crate::services::{
    AddSalaryOutput, BorrowMoneyOutput, BudgetTracking, PayLoanOutput, RecordExpenseOutput,
};

pub fn format_salary_recorded(output: &AddSalaryOutput) -> String {
    let mut text = format!(
        "Recorded salary of {}\n",
        output.salary_transaction.amount()
    );

    for txn in &output.charge_transactions {
        text.push_str(&format!(
            "  - {} deducted for {}\n",
            txn.amount(),
            txn.category()
        ));
    }

    if !output.charge_transactions.is_empty() {
        text.push_str(&format!("Fixed charges: {}\n", output.fixed_charges_total));
    }
    text.push_str(&format!("Net amount: {}\n", output.net_amount));
    text
}

pub fn format_expense_recorded(output: &RecordExpenseOutput) -> String {
    let txn = &output.transaction;
    let mut text = format!("Recorded {} in {}\n", txn.amount(), txn.category());

    match &output.budget {
        BudgetTracking::Tracked(overlay) => {
            text.push_str(&format!(
                "Budget: {} of {} used ({}), {} remaining\n",
                overlay.spent,
                overlay.budget.limit(),
                format_percentage(overlay.percentage_used),
                overlay.remaining
            ));
            if overlay.exceeded {
                text.push_str("Budget exceeded!\n");
            }
        }
        BudgetTracking::NotConfigured => {}
        BudgetTracking::Unavailable { reason } => {
            text.push_str(&format!("warning: budget not checked ({})\n", reason));
        }
    }

    text
}

pub fn format_money_borrowed(output: &BorrowMoneyOutput) -> String {
    format!(
        "Borrowed {} from {}\nLoan ID: {}\n",
        output.loan.amount(),
        output.loan.lender_name(),
        output.loan.id()
    )
}

pub fn format_loan_paid(output: &PayLoanOutput) -> String {
    let mut text = format!(
        "Paid {} to {}\n",
        output.transaction.amount(),
        output.loan.lender_name()
    );
    if output.fully_paid {
        text.push_str("Loan fully paid back.\n");
        if output.remaining_amount.is_negative() {
            text.push_str(&format!(
                "Overpaid by {}\n",
                output.remaining_amount.abs()
            ));
        }
    } else {
        text.push_str(&format!("Remaining: {}\n", output.remaining_amount));
    }
    text
}
