//! Fixed charge CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::{MokaError, MokaResult};
use crate::models::FixedChargeId;
use crate::services::FixedChargeService;
use crate::storage::Storage;

/// Fixed charge subcommands
#[derive(Subcommand)]
pub enum FixedChargeCommands {
    /// Add a recurring charge, deducted from every salary
    Add {
        /// Charge name (used as its expense category)
        name: String,
        /// Amount per salary
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List all fixed charges
    List,

    /// Resume deducting a charge
    Activate {
        /// Fixed charge ID
        id: String,
    },

    /// Stop deducting a charge without deleting it
    Deactivate {
        /// Fixed charge ID
        id: String,
    },

    /// Delete a fixed charge
    Remove {
        /// Fixed charge ID
        id: String,
    },
}

fn parse_id(raw: &str) -> MokaResult<FixedChargeId> {
    raw.parse()
        .map_err(|_| MokaError::fixed_charge_not_found(raw))
}

/// Handle a fixed charge command
pub fn handle_fixed_charge_command(storage: &Storage, cmd: FixedChargeCommands) -> MokaResult<()> {
    let service = FixedChargeService::new(&storage.fixed_charges);

    match cmd {
        FixedChargeCommands::Add {
            name,
            amount,
            description,
        } => {
            let charge = service.add(&name, amount, &description)?;
            println!("Added fixed charge: {}", charge);
            println!("  ID: {}", charge.id());
        }
        FixedChargeCommands::List => {
            let charges = service.list_all()?;
            print!("{}", display::format_fixed_charge_list(&charges));
        }
        FixedChargeCommands::Activate { id } => {
            let charge = service.activate(parse_id(&id)?)?;
            println!("Activated: {}", charge);
        }
        FixedChargeCommands::Deactivate { id } => {
            let charge = service.deactivate(parse_id(&id)?)?;
            println!("Deactivated: {}", charge);
        }
        FixedChargeCommands::Remove { id } => {
            service.remove(parse_id(&id)?)?;
            println!("Removed fixed charge {}", id);
        }
    }

    Ok(())
}
