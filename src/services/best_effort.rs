//! Best-effort lookups
//!
//! Some reads feed optional parts of a result (budget overlays, loan
//! totals). When they fail the caller still gets an answer, and the
//! failure stays visible as [`BestEffort::Degraded`] instead of vanishing.

use tracing::warn;

use crate::error::MokaResult;

/// Outcome of a lookup whose failure must not fail the surrounding call
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort<T> {
    /// The lookup succeeded
    Loaded(T),
    /// The lookup failed; `reason` is the rendered error
    Degraded { reason: String },
}

impl<T> BestEffort<T> {
    /// Capture a lookup result, logging a warning on failure
    pub fn capture(what: &str, result: MokaResult<T>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => {
                warn!(lookup = what, error = %err, "best-effort lookup degraded");
                Self::Degraded {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Degraded { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Degraded { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MokaError;

    #[test]
    fn test_loaded() {
        let loaded = BestEffort::capture("numbers", Ok(vec![1, 2]));
        assert!(!loaded.is_degraded());
        assert_eq!(loaded.as_loaded(), Some(&vec![1, 2]));
        assert_eq!(loaded.reason(), None);
    }

    #[test]
    fn test_degraded_keeps_reason() {
        let degraded: BestEffort<Vec<i32>> =
            BestEffort::capture("numbers", Err(MokaError::Storage("disk gone".into())));
        assert!(degraded.is_degraded());
        assert_eq!(degraded.reason(), Some("Storage error: disk gone"));
        assert_eq!(degraded.as_loaded(), None);
    }
}
