//! Custom error types for Moka
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Errors raised when building a [`Money`](crate::models::Money) from a
/// user-supplied decimal amount
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount was exactly zero (or rounded to zero minor units)
    #[error("amount cannot be zero")]
    ZeroAmount,

    /// The amount was below zero
    #[error("amount cannot be negative")]
    NegativeAmount,

    /// The amount was not a finite number
    #[error("amount is invalid")]
    InvalidAmount,
}

/// The main error type for Moka operations
#[derive(Error, Debug)]
pub enum MokaError {
    /// Monetary amount rejected at construction
    #[error("Invalid amount: {0}")]
    Money(#[from] MoneyError),

    /// A required field was empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A repository call failed; `context` names the operation and entity
    #[error("{context}: {source}")]
    Repository {
        context: String,
        #[source]
        source: Box<MokaError>,
    },

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MokaError {
    /// Wrap a storage failure with the operation that triggered it.
    ///
    /// `NotFound` is returned unchanged so callers can still match on it.
    pub fn repository(context: impl Into<String>, source: MokaError) -> Self {
        match source {
            err @ Self::NotFound { .. } => err,
            other => Self::Repository {
                context: context.into(),
                source: Box::new(other),
            },
        }
    }

    /// Create an "invalid input" error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for fixed charges
    pub fn fixed_charge_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Fixed charge",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for loans
    pub fn loan_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Loan",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from rejected caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Money(_))
    }

    /// Check if this is a wrapped repository failure
    pub fn is_repository_failure(&self) -> bool {
        matches!(self, Self::Repository { .. })
    }
}

impl From<std::io::Error> for MokaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MokaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Moka operations
pub type MokaResult<T> = Result<T, MokaError>;
