//! Loan CLI commands

use clap::{Subcommand, ValueEnum};

use super::dates::parse_date;
use crate::config::settings::Settings;
use crate::display;
use crate::error::{MokaError, MokaResult};
use crate::models::{LoanId, LoanStatus};
use crate::services::listing::{self, LoanFilter};
use crate::services::{BorrowMoney, BorrowMoneyInput, PayLoan, PayLoanInput};
use crate::storage::{LoanRepository, Storage};

/// Loan status filter for listing
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    PaidBack,
}

/// Loan subcommands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Borrow money from someone
    Borrow {
        /// Who lent the money
        lender: String,
        /// Amount borrowed
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// What it was for
        description: String,
        /// Date borrowed (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Pay back (part of) a loan
    Pay {
        /// Loan ID
        loan_id: String,
        /// Amount paid
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Date paid (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List loans (active ones by default)
    List {
        /// Include paid-back loans
        #[arg(short, long)]
        all: bool,
        /// Only loans with this status
        #[arg(short, long, value_enum, conflicts_with = "all")]
        status: Option<StatusArg>,
    },

    /// Show a single loan
    Show {
        /// Loan ID
        loan_id: String,
    },
}

/// Handle a loan command
pub fn handle_loan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LoanCommands,
) -> MokaResult<()> {
    match cmd {
        LoanCommands::Borrow {
            lender,
            amount,
            description,
            date,
        } => {
            let input = BorrowMoneyInput {
                lender_name: lender,
                amount,
                description,
                date: parse_date(date.as_deref())?,
            };
            let output = BorrowMoney::new(&storage.loans, &storage.transactions).execute(input)?;
            print!("{}", display::format_money_borrowed(&output));
        }

        LoanCommands::Pay {
            loan_id,
            amount,
            date,
        } => {
            let input = PayLoanInput {
                loan_id,
                amount,
                date: parse_date(date.as_deref())?,
            };
            let output = PayLoan::new(&storage.loans, &storage.transactions).execute(input)?;
            print!("{}", display::format_loan_paid(&output));
        }

        LoanCommands::List { all, status } => {
            let filter = match (all, status) {
                (true, _) => LoanFilter::All,
                (false, Some(StatusArg::Active)) | (false, None) => LoanFilter::Active,
                (false, Some(StatusArg::PaidBack)) => LoanFilter::Status(LoanStatus::PaidBack),
            };
            let loans = listing::loans(&storage.loans, filter)?;
            print!("{}", display::format_loan_list(&loans, &settings.date_format));
        }

        LoanCommands::Show { loan_id } => {
            let id: LoanId = loan_id
                .parse()
                .map_err(|_| MokaError::loan_not_found(loan_id.as_str()))?;
            let loan = storage.loans.find_by_id(id)?;
            print!("{}", display::format_loan_details(&loan, &settings.date_format));
        }
    }

    Ok(())
}
