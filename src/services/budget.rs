//! Budget service
//!
//! Setting, listing and removing monthly category budgets. There is at most
//! one budget per category and month: setting it again replaces the limit.

use tracing::info;

use crate::error::{MokaError, MokaResult};
use crate::models::{Budget, BudgetId, Category, Money, MonthPeriod};
use crate::storage::BudgetRepository;

/// Service for budget management
pub struct BudgetService<'a> {
    repository: &'a dyn BudgetRepository,
}

impl<'a> BudgetService<'a> {
    pub fn new(repository: &'a dyn BudgetRepository) -> Self {
        Self { repository }
    }

    /// Create or replace the budget for a category in one month
    pub fn set_budget(
        &self,
        category_name: &str,
        limit: f64,
        period: MonthPeriod,
    ) -> MokaResult<Budget> {
        let category = Category::expense(category_name.trim())?;
        let limit = Money::new(limit)?;

        let existing = match self.repository.find_by_category_and_month(
            category.name(),
            period.month(),
            period.year(),
        ) {
            Ok(budget) => Some(budget),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(MokaError::repository("failed to look up budget", err)),
        };

        let budget = match existing {
            Some(current) => {
                let replaced =
                    Budget::with_id(current.id(), category, limit, period.month(), period.year())?;
                self.repository
                    .update(&replaced)
                    .map_err(|e| MokaError::repository("failed to update budget", e))?;
                replaced
            }
            None => {
                let created = Budget::new(category, limit, period.month(), period.year())?;
                self.repository
                    .save(&created)
                    .map_err(|e| MokaError::repository("failed to save budget", e))?;
                created
            }
        };

        info!(
            budget = %budget.id(),
            category = budget.category().name(),
            %period,
            limit = %limit,
            "budget set"
        );
        Ok(budget)
    }

    pub fn list_for_month(&self, period: MonthPeriod) -> MokaResult<Vec<Budget>> {
        let mut budgets = self
            .repository
            .find_by_month_and_year(period.month(), period.year())
            .map_err(|e| MokaError::repository("failed to list budgets", e))?;
        budgets.sort_by(|a, b| a.category().name().cmp(b.category().name()));
        Ok(budgets)
    }

    pub fn remove(&self, id: BudgetId) -> MokaResult<()> {
        self.repository
            .delete(id)
            .map_err(|e| MokaError::repository("failed to delete budget", e))?;
        info!(budget = %id, "budget removed");
        Ok(())
    }
}
