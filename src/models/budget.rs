//! Budget model
//!
//! A spending ceiling for one category in one calendar month. The budget
//! itself never tracks spending; callers pass the spent amount in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;
use crate::error::{MokaError, MokaResult};

/// A monthly limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    id: BudgetId,
    category: Category,
    limit: Money,
    month: u32,
    year: i32,
}

impl Budget {
    /// Create a budget with a fresh ID
    pub fn new(category: Category, limit: Money, month: u32, year: i32) -> MokaResult<Self> {
        Self::with_id(BudgetId::new(), category, limit, month, year)
    }

    /// Create a budget with a known ID
    pub fn with_id(
        id: BudgetId,
        category: Category,
        limit: Money,
        month: u32,
        year: i32,
    ) -> MokaResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(MokaError::invalid_input(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }

        Ok(Self {
            id,
            category,
            limit,
            month,
            year,
        })
    }

    pub fn id(&self) -> BudgetId {
        self.id
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether this budget applies to the given category name and month
    pub fn matches(&self, category_name: &str, month: u32, year: i32) -> bool {
        self.category.name() == category_name && self.month == month && self.year == year
    }

    /// Spending strictly above the limit
    pub fn is_exceeded(&self, spent: Money) -> bool {
        spent > self.limit
    }

    /// Limit minus spent; negative when overrun
    pub fn remaining_amount(&self, spent: Money) -> Money {
        self.limit - spent
    }

    /// Share of the limit already spent, in percent
    ///
    /// A zero limit reports 0 rather than dividing by zero.
    pub fn percentage_used(&self, spent: Money) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        spent.cents() as f64 / self.limit.cents() as f64 * 100.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{:02}: {}",
            self.category, self.year, self.month, self.limit
        )
    }
}
