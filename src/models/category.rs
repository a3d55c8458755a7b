//! Category model
//!
//! A category is a name tagged as income or expense. A handful of
//! well-known categories exist as constants; everything else (expense
//! labels, fixed charge names, loan payment labels) is created on the fly.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::error::{MokaError, MokaResult};

/// Whether a category classifies money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A named classification for transactions and budgets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    name: Cow<'static, str>,
    kind: CategoryKind,
}

impl Category {
    pub const SALARY: Category = Category::well_known("Salary", CategoryKind::Income);
    pub const BORROWED: Category = Category::well_known("Borrowed (Salaf)", CategoryKind::Income);
    pub const FOOD: Category = Category::well_known("Food", CategoryKind::Expense);
    pub const TRANSPORT: Category = Category::well_known("Transport", CategoryKind::Expense);
    pub const ENTERTAINMENT: Category =
        Category::well_known("Entertainment", CategoryKind::Expense);
    pub const SHOPPING: Category = Category::well_known("Shopping", CategoryKind::Expense);
    pub const HEALTH: Category = Category::well_known("Health", CategoryKind::Expense);
    pub const OTHER: Category = Category::well_known("Other", CategoryKind::Expense);

    const fn well_known(name: &'static str, kind: CategoryKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
        }
    }

    /// Create a category, rejecting an empty (or whitespace-only) name
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> MokaResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MokaError::invalid_input("category name cannot be empty"));
        }

        Ok(Self {
            name: Cow::Owned(name),
            kind,
        })
    }

    /// Shorthand for an ad hoc expense category
    pub fn expense(name: impl Into<String>) -> MokaResult<Self> {
        Self::new(name, CategoryKind::Expense)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn is_income(&self) -> bool {
        self.kind == CategoryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == CategoryKind::Expense
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let cat = Category::new("Groceries", CategoryKind::Expense).unwrap();
        assert_eq!(cat.name(), "Groceries");
        assert!(cat.is_expense());
        assert!(!cat.is_income());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Category::new("", CategoryKind::Income)
            .unwrap_err()
            .is_invalid_input());
        assert!(Category::expense("   ").is_err());
    }

    #[test]
    fn test_well_known_categories() {
        assert_eq!(Category::SALARY.name(), "Salary");
        assert!(Category::SALARY.is_income());
        assert_eq!(Category::BORROWED.name(), "Borrowed (Salaf)");
        assert!(Category::BORROWED.is_income());
        assert!(Category::FOOD.is_expense());
    }

    #[test]
    fn test_owned_equals_well_known() {
        let owned = Category::new("Food", CategoryKind::Expense).unwrap();
        assert_eq!(owned, Category::FOOD);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::TRANSPORT).unwrap();
        assert_eq!(json, r#"{"name":"Transport","kind":"expense"}"#);

        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::TRANSPORT);
    }
}
