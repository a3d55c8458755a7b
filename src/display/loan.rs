//! Loan display formatting

use tabled::Tabled;

use super::format::table;
use crate::models::loan::total_owed;
use crate::models::Loan;

#[derive(Tabled)]
struct LoanRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Lender")]
    lender: String,
    #[tabled(rename = "Borrowed")]
    borrowed_at: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format loans as a table followed by the total still owed
pub fn format_loan_list(loans: &[Loan], date_format: &str) -> String {
    if loans.is_empty() {
        return "No loans found.\n".to_string();
    }

    let rows: Vec<LoanRow> = loans
        .iter()
        .map(|loan| LoanRow {
            id: loan.id().to_string(),
            lender: loan.lender_name().to_string(),
            borrowed_at: loan.borrowed_at().format(date_format).to_string(),
            amount: loan.amount().to_string(),
            paid: loan.amount_paid().to_string(),
            remaining: loan.remaining_amount().to_string(),
            status: loan.status().to_string(),
        })
        .collect();

    let mut output = table(rows, "");
    output.push_str(&format!("Total owed: {}\n", total_owed(loans)));
    output
}

/// Format loan details for display
pub fn format_loan_details(loan: &Loan, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Loan:      {}\n", loan.id()));
    output.push_str(&format!("Lender:    {}\n", loan.lender_name()));
    output.push_str(&format!(
        "Borrowed:  {} on {}\n",
        loan.amount(),
        loan.borrowed_at().format(date_format)
    ));
    output.push_str(&format!("Paid:      {}\n", loan.amount_paid()));
    output.push_str(&format!("Remaining: {}\n", loan.remaining_amount()));
    output.push_str(&format!("Status:    {}\n", loan.status()));

    if let Some(paid_back_at) = loan.paid_back_at() {
        output.push_str(&format!("Closed:    {}\n", paid_back_at.format(date_format)));
    }
    if !loan.description().is_empty() {
        output.push_str(&format!("Note:      {}\n", loan.description()));
    }

    output
}
