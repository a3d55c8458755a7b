//! Fixed charge repository for JSON storage

use std::path::PathBuf;

use tracing::debug;

use crate::error::{MokaError, MokaResult};
use crate::models::{FixedCharge, FixedChargeId};

use super::file_io::{read_json, write_json_atomic};
use super::traits::FixedChargeRepository;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct FixedChargeData {
    #[serde(default)]
    fixed_charges: Vec<FixedCharge>,
}

/// Fixed charge repository backed by a JSON file
pub struct JsonFixedChargeRepository {
    path: PathBuf,
}

impl JsonFixedChargeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> MokaResult<Vec<FixedCharge>> {
        let data: FixedChargeData = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            count = data.fixed_charges.len(),
            "loaded fixed charges"
        );
        Ok(data.fixed_charges)
    }

    fn store(&self, fixed_charges: Vec<FixedCharge>) -> MokaResult<()> {
        write_json_atomic(&self.path, &FixedChargeData { fixed_charges })
    }
}

impl FixedChargeRepository for JsonFixedChargeRepository {
    fn save(&self, charge: &FixedCharge) -> MokaResult<()> {
        let mut charges = self.load()?;
        if charges.iter().any(|c| c.id() == charge.id()) {
            return Err(MokaError::Storage(format!(
                "fixed charge {} already exists",
                charge.id()
            )));
        }
        charges.push(charge.clone());
        self.store(charges)
    }

    fn find_by_id(&self, id: FixedChargeId) -> MokaResult<FixedCharge> {
        self.load()?
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| MokaError::fixed_charge_not_found(id.to_string()))
    }

    /// In insertion order
    fn find_all(&self) -> MokaResult<Vec<FixedCharge>> {
        self.load()
    }

    fn find_active(&self) -> MokaResult<Vec<FixedCharge>> {
        Ok(self.load()?.into_iter().filter(FixedCharge::is_active).collect())
    }

    fn update(&self, charge: &FixedCharge) -> MokaResult<()> {
        let mut charges = self.load()?;
        let slot = charges
            .iter_mut()
            .find(|c| c.id() == charge.id())
            .ok_or_else(|| MokaError::fixed_charge_not_found(charge.id().to_string()))?;
        *slot = charge.clone();
        self.store(charges)
    }

    fn delete(&self, id: FixedChargeId) -> MokaResult<()> {
        let mut charges = self.load()?;
        let before = charges.len();
        charges.retain(|c| c.id() != id);
        if charges.len() == before {
            return Err(MokaError::fixed_charge_not_found(id.to_string()));
        }
        self.store(charges)
    }
}
