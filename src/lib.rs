//! Moka - terminal personal finance ledger
//!
//! Tracks salary, expenses, monthly budgets, recurring fixed charges and
//! informal loans, all in a single currency (MAD).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, settings and logging setup
//! - `error`: Custom error types
//! - `models`: Domain entities and pure aggregation functions
//! - `storage`: Repository traits with JSON file and in-memory backends
//! - `services`: Use cases (salary, expense, loans, monthly summary)
//! - `display`: Terminal rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moka::config::paths::MokaPaths;
//! use moka::services::{AddSalary, AddSalaryInput};
//! use moka::storage::Storage;
//!
//! let storage = Storage::new(MokaPaths::new()?)?;
//! let output = AddSalary::new(&storage.transactions, &storage.fixed_charges).execute(
//!     AddSalaryInput { amount: 5000.0, description: "May".into(), date: chrono::Utc::now() },
//! )?;
//! println!("net: {}", output.net_amount);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MokaError, MokaResult};
