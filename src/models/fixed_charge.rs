//! Fixed charge model
//!
//! A recurring expense template (rent, subscriptions, ...) that is applied
//! automatically whenever a salary is recorded. Activation state changes by
//! replacement: `activate`/`deactivate` return a new value for the caller
//! to persist.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::FixedChargeId;
use super::money::Money;

/// A recurring charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCharge {
    id: FixedChargeId,
    name: String,
    amount: Money,
    #[serde(default)]
    description: String,
    is_active: bool,
}

impl FixedCharge {
    /// Create a fixed charge with a fresh ID
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self::with_id(FixedChargeId::new(), name, amount, description, is_active)
    }

    /// Create a fixed charge with a known ID
    pub fn with_id(
        id: FixedChargeId,
        name: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            description: description.into(),
            is_active,
        }
    }

    pub fn id(&self) -> FixedChargeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Copy of this charge marked active
    #[must_use]
    pub fn activate(&self) -> Self {
        Self {
            is_active: true,
            ..self.clone()
        }
    }

    /// Copy of this charge marked inactive
    #[must_use]
    pub fn deactivate(&self) -> Self {
        Self {
            is_active: false,
            ..self.clone()
        }
    }
}

impl fmt::Display for FixedCharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_active { "active" } else { "inactive" };
        write!(f, "{} {} ({})", self.name, self.amount, state)
    }
}

/// Sum of amounts over active charges; inactive ones contribute nothing
pub fn total_of_active(charges: &[FixedCharge]) -> Money {
    charges
        .iter()
        .filter(|c| c.is_active)
        .map(|c| c.amount)
        .sum()
}

/// The active subset, in input order
pub fn filter_active(charges: &[FixedCharge]) -> Vec<FixedCharge> {
    charges.iter().filter(|c| c.is_active).cloned().collect()
}
