//! Budget CLI commands

use clap::Subcommand;

use super::dates::parse_month;
use crate::display;
use crate::error::{MokaError, MokaResult};
use crate::models::BudgetId;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category (replaces any existing one)
    Set {
        /// Category name
        category: String,
        /// Monthly limit
        #[arg(allow_negative_numbers = true)]
        limit: f64,
        /// Month (YYYY-MM, "current" or "last"), defaults to current
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List budgets for a month
    List {
        /// Month (YYYY-MM, "current" or "last"), defaults to current
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Remove {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> MokaResult<()> {
    let service = BudgetService::new(&storage.budgets);

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            month,
        } => {
            let period = parse_month(month.as_deref())?;
            let budget = service.set_budget(&category, limit, period)?;
            println!("Budget set: {}", budget);
        }
        BudgetCommands::List { month } => {
            let period = parse_month(month.as_deref())?;
            let budgets = service.list_for_month(period)?;
            print!("{}", display::format_budget_list(&budgets, period));
        }
        BudgetCommands::Remove { id } => {
            let budget_id: BudgetId = id
                .parse()
                .map_err(|_| MokaError::budget_not_found(id.as_str()))?;
            service.remove(budget_id)?;
            println!("Removed budget {}", id);
        }
    }

    Ok(())
}
