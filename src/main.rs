use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use moka::cli::{
    handle_budget_command, handle_expense_command, handle_fixed_charge_command,
    handle_loan_command, handle_salary_command, handle_summary_command,
    handle_transaction_command, ExpenseArgs, SalaryArgs, SummaryArgs,
};
use moka::config::{paths::MokaPaths, settings::Settings};
use moka::storage::{initialize_storage, needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "moka",
    version,
    about = "Terminal personal finance ledger",
    long_about = "Moka keeps a personal ledger in MAD: record salaries (with fixed \
                  charges deducted automatically), track expenses against monthly \
                  budgets, and keep informal loans from friends and family in check."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a salary; active fixed charges are deducted
    Salary(SalaryArgs),

    /// Record an expense and check it against the month's budget
    #[command(alias = "spend")]
    Expense(ExpenseArgs),

    /// Show the monthly summary
    Summary(SummaryArgs),

    /// Loan management commands
    #[command(subcommand)]
    Loan(moka::cli::LoanCommands),

    /// Fixed charge management commands
    #[command(subcommand, alias = "fc")]
    FixedCharge(moka::cli::FixedChargeCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(moka::cli::BudgetCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(moka::cli::TransactionCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MokaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    settings.logging.init();
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Salary(args)) => handle_salary_command(&storage, args)?,
        Some(Commands::Expense(args)) => handle_expense_command(&storage, args)?,
        Some(Commands::Summary(args)) => handle_summary_command(&storage, args)?,
        Some(Commands::Loan(cmd)) => handle_loan_command(&storage, &settings, cmd)?,
        Some(Commands::FixedCharge(cmd)) => handle_fixed_charge_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?
        }
        Some(Commands::Init) => {
            println!("Initializing Moka at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  moka fixed-charge add Rent 1200   # deducted from every salary");
            println!("  moka salary 5000 \"May salary\"");
            println!("  moka summary");
        }
        Some(Commands::Config) => {
            println!("Moka Configuration");
            println!("==================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Date format: {}", settings.date_format);
            println!("  Log level:   {}", settings.logging.level);
            println!("  Log format:  {:?}", settings.logging.format);
            println!("  Initialized: {}", !needs_initialization(&paths));
        }
        None => {
            println!("Moka - personal finance ledger");
            println!();
            println!("Run 'moka --help' for usage information.");
            println!("Run 'moka init' to set up the data directory.");
        }
    }

    Ok(())
}
