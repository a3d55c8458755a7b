//! Transaction CLI commands

use clap::Subcommand;

use super::dates::parse_month;
use crate::config::settings::Settings;
use crate::display;
use crate::error::MokaResult;
use crate::services::listing;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions, most recent first
    List {
        /// Month (YYYY-MM, "current" or "last"), defaults to current
        #[arg(short, long)]
        month: Option<String>,
        /// List every transaction regardless of month
        #[arg(short, long, conflicts_with = "month")]
        all: bool,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> MokaResult<()> {
    match cmd {
        TransactionCommands::List { month, all, limit } => {
            let mut transactions = if all {
                listing::all_transactions(&storage.transactions)?
            } else {
                let period = parse_month(month.as_deref())?;
                listing::transactions_for_month(&storage.transactions, period)?
            };
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }
            print!(
                "{}",
                display::format_transaction_list(&transactions, &settings.date_format)
            );
        }
    }

    Ok(())
}
