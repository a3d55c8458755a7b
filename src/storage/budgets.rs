//! Budget repository for JSON storage
//!
//! Manages `budgets.json`. One budget per (category, month, year) is
//! expected but not enforced here; lookups return the first match.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{MokaError, MokaResult};
use crate::models::{Budget, BudgetId};

use super::file_io::{read_json, write_json_atomic};
use super::traits::BudgetRepository;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Budget repository backed by a JSON file
pub struct JsonBudgetRepository {
    path: PathBuf,
}

impl JsonBudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> MokaResult<Vec<Budget>> {
        let data: BudgetData = read_json(&self.path)?;
        debug!(path = %self.path.display(), count = data.budgets.len(), "loaded budgets");
        Ok(data.budgets)
    }

    fn store(&self, mut budgets: Vec<Budget>) -> MokaResult<()> {
        budgets.sort_by(|a, b| {
            (a.year(), a.month(), a.category().name()).cmp(&(
                b.year(),
                b.month(),
                b.category().name(),
            ))
        });
        write_json_atomic(&self.path, &BudgetData { budgets })
    }
}

impl BudgetRepository for JsonBudgetRepository {
    fn save(&self, budget: &Budget) -> MokaResult<()> {
        let mut budgets = self.load()?;
        if budgets.iter().any(|b| b.id() == budget.id()) {
            return Err(MokaError::Storage(format!(
                "budget {} already exists",
                budget.id()
            )));
        }
        budgets.push(budget.clone());
        self.store(budgets)
    }

    fn find_by_id(&self, id: BudgetId) -> MokaResult<Budget> {
        self.load()?
            .into_iter()
            .find(|b| b.id() == id)
            .ok_or_else(|| MokaError::budget_not_found(id.to_string()))
    }

    fn find_by_month_and_year(&self, month: u32, year: i32) -> MokaResult<Vec<Budget>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|b| b.month() == month && b.year() == year)
            .collect())
    }

    fn find_by_category_and_month(
        &self,
        category_name: &str,
        month: u32,
        year: i32,
    ) -> MokaResult<Budget> {
        self.load()?
            .into_iter()
            .find(|b| b.matches(category_name, month, year))
            .ok_or_else(|| {
                MokaError::budget_not_found(format!("{} {}-{:02}", category_name, year, month))
            })
    }

    fn update(&self, budget: &Budget) -> MokaResult<()> {
        let mut budgets = self.load()?;
        let slot = budgets
            .iter_mut()
            .find(|b| b.id() == budget.id())
            .ok_or_else(|| MokaError::budget_not_found(budget.id().to_string()))?;
        *slot = budget.clone();
        self.store(budgets)
    }

    fn delete(&self, id: BudgetId) -> MokaResult<()> {
        let mut budgets = self.load()?;
        let before = budgets.len();
        budgets.retain(|b| b.id() != id);
        if budgets.len() == before {
            return Err(MokaError::budget_not_found(id.to_string()));
        }
        self.store(budgets)
    }
}
