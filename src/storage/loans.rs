//! Loan repository for JSON storage

use std::path::PathBuf;

use tracing::debug;

use crate::error::{MokaError, MokaResult};
use crate::models::{Loan, LoanId, LoanStatus};

use super::file_io::{read_json, write_json_atomic};
use super::traits::LoanRepository;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LoanData {
    #[serde(default)]
    loans: Vec<Loan>,
}

/// Loan repository backed by a JSON file
pub struct JsonLoanRepository {
    path: PathBuf,
}

impl JsonLoanRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> MokaResult<Vec<Loan>> {
        let data: LoanData = read_json(&self.path)?;
        debug!(path = %self.path.display(), count = data.loans.len(), "loaded loans");
        Ok(data.loans)
    }

    fn store(&self, mut loans: Vec<Loan>) -> MokaResult<()> {
        sort_newest_first(&mut loans);
        write_json_atomic(&self.path, &LoanData { loans })
    }
}

fn sort_newest_first(loans: &mut [Loan]) {
    loans.sort_by(|a, b| b.borrowed_at().cmp(&a.borrowed_at()));
}

impl LoanRepository for JsonLoanRepository {
    fn save(&self, loan: &Loan) -> MokaResult<()> {
        let mut loans = self.load()?;
        if loans.iter().any(|l| l.id() == loan.id()) {
            return Err(MokaError::Storage(format!("loan {} already exists", loan.id())));
        }
        loans.push(loan.clone());
        self.store(loans)
    }

    fn find_by_id(&self, id: LoanId) -> MokaResult<Loan> {
        self.load()?
            .into_iter()
            .find(|l| l.id() == id)
            .ok_or_else(|| MokaError::loan_not_found(id.to_string()))
    }

    fn find_all(&self) -> MokaResult<Vec<Loan>> {
        let mut loans = self.load()?;
        sort_newest_first(&mut loans);
        Ok(loans)
    }

    fn find_active(&self) -> MokaResult<Vec<Loan>> {
        self.find_by_status(LoanStatus::Active)
    }

    fn find_by_status(&self, status: LoanStatus) -> MokaResult<Vec<Loan>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|l| l.status() == status)
            .collect())
    }

    fn update(&self, loan: &Loan) -> MokaResult<()> {
        let mut loans = self.load()?;
        let slot = loans
            .iter_mut()
            .find(|l| l.id() == loan.id())
            .ok_or_else(|| MokaError::loan_not_found(loan.id().to_string()))?;
        *slot = loan.clone();
        self.store(loans)
    }

    fn delete(&self, id: LoanId) -> MokaResult<()> {
        let mut loans = self.load()?;
        let before = loans.len();
        loans.retain(|l| l.id() != id);
        if loans.len() == before {
            return Err(MokaError::loan_not_found(id.to_string()));
        }
        self.store(loans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, JsonLoanRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonLoanRepository::new(temp_dir.path().join("loans.json"));
        (temp_dir, repo)
    }

    fn loan(lender: &str, cents: i64, day: u32) -> Loan {
        Loan::new(
            lender,
            Money::from_cents(cents),
            Utc.with_ymd_and_hms(2025, 5, day, 8, 0, 0).unwrap(),
            "",
        )
    }

    #[test]
    fn test_save_and_find() {
        let (_temp_dir, repo) = create_test_repo();
        let l = loan("Hamza", 80_000, 1);
        repo.save(&l).unwrap();
        assert_eq!(repo.find_by_id(l.id()).unwrap(), l);
    }

    #[test]
    fn test_status_queries_follow_updates() {
        let (_temp_dir, repo) = create_test_repo();
        let a = loan("Hamza", 80_000, 1);
        let b = loan("Younes", 20_000, 2);
        repo.save(&a).unwrap();
        repo.save(&b).unwrap();

        let paid = a.record_payment(
            Money::from_cents(80_000),
            Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap(),
        );
        repo.update(&paid).unwrap();

        let active = repo.find_active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].lender_name(), "Younes");

        let paid_back = repo.find_by_status(LoanStatus::PaidBack).unwrap();
        assert_eq!(paid_back.len(), 1);
        assert!(paid_back[0].paid_back_at().is_some());
    }

    #[test]
    fn test_find_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&loan("A", 1, 1)).unwrap();
        repo.save(&loan("B", 1, 9)).unwrap();

        let lenders: Vec<_> = repo
            .find_all()
            .unwrap()
            .iter()
            .map(|l| l.lender_name().to_string())
            .collect();
        assert_eq!(lenders, vec!["B", "A"]);
    }

    #[test]
    fn test_missing_ids() {
        let (_temp_dir, repo) = create_test_repo();
        let ghost = loan("Ghost", 1, 1);
        assert!(repo.find_by_id(ghost.id()).unwrap_err().is_not_found());
        assert!(repo.update(&ghost).unwrap_err().is_not_found());
        assert!(repo.delete(ghost.id()).unwrap_err().is_not_found());
    }
}
