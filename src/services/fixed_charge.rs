//! Fixed charge service
//!
//! Managing the recurring charges that a salary deducts. Charges are
//! replaced rather than mutated; activation writes a new value via
//! `update`.

use tracing::info;

use crate::error::{MokaError, MokaResult};
use crate::models::{FixedCharge, FixedChargeId, Money};
use crate::storage::FixedChargeRepository;

/// Service for fixed charge management
pub struct FixedChargeService<'a> {
    repository: &'a dyn FixedChargeRepository,
}

impl<'a> FixedChargeService<'a> {
    pub fn new(repository: &'a dyn FixedChargeRepository) -> Self {
        Self { repository }
    }

    /// Create a new, active fixed charge
    pub fn add(&self, name: &str, amount: f64, description: &str) -> MokaResult<FixedCharge> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MokaError::invalid_input("fixed charge name cannot be empty"));
        }
        let amount = Money::new(amount)?;

        let charge = FixedCharge::new(name, amount, description.trim(), true);
        self.repository
            .save(&charge)
            .map_err(|e| MokaError::repository("failed to save fixed charge", e))?;

        info!(charge = %charge.id(), name, amount = %amount, "fixed charge added");
        Ok(charge)
    }

    /// Every charge, active or not
    pub fn list_all(&self) -> MokaResult<Vec<FixedCharge>> {
        self.repository
            .find_all()
            .map_err(|e| MokaError::repository("failed to list fixed charges", e))
    }

    pub fn list_active(&self) -> MokaResult<Vec<FixedCharge>> {
        self.repository
            .find_active()
            .map_err(|e| MokaError::repository("failed to list active fixed charges", e))
    }

    pub fn activate(&self, id: FixedChargeId) -> MokaResult<FixedCharge> {
        self.replace(id, FixedCharge::activate, "activated")
    }

    pub fn deactivate(&self, id: FixedChargeId) -> MokaResult<FixedCharge> {
        self.replace(id, FixedCharge::deactivate, "deactivated")
    }

    pub fn remove(&self, id: FixedChargeId) -> MokaResult<()> {
        self.repository
            .delete(id)
            .map_err(|e| MokaError::repository("failed to delete fixed charge", e))?;
        info!(charge = %id, "fixed charge removed");
        Ok(())
    }

    fn replace(
        &self,
        id: FixedChargeId,
        change: fn(&FixedCharge) -> FixedCharge,
        action: &str,
    ) -> MokaResult<FixedCharge> {
        let current = self
            .repository
            .find_by_id(id)
            .map_err(|e| MokaError::repository("failed to find fixed charge", e))?;

        let updated = change(&current);
        self.repository
            .update(&updated)
            .map_err(|e| MokaError::repository("failed to update fixed charge", e))?;

        info!(charge = %id, name = updated.name(), "fixed charge {}", action);
        Ok(updated)
    }
}
