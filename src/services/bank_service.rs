//! Bank service - Seam over bank persistence.
//!
//! Pure delegation to the bank repository; existence checks and the HTTP
//! status mapping live in the handlers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Bank, BankDraft};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Bank service trait for dependency injection.
#[async_trait]
pub trait BankService: Send + Sync {
    /// List all banks with their proposals
    async fn list_banks(&self) -> AppResult<Vec<Bank>>;

    /// Get bank by ID
    async fn get_bank(&self, id: i64) -> AppResult<Option<Bank>>;

    /// Insert or fully overwrite a bank (and its proposal set)
    async fn save_bank(&self, draft: BankDraft) -> AppResult<Bank>;

    /// Delete bank and its proposals
    async fn delete_bank(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of BankService using Unit of Work.
pub struct BankManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BankManager<U> {
    /// Create new bank service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BankService for BankManager<U> {
    async fn list_banks(&self) -> AppResult<Vec<Bank>> {
        self.uow.banks().find_all().await
    }

    async fn get_bank(&self, id: i64) -> AppResult<Option<Bank>> {
        self.uow.banks().find_by_id(id).await
    }

    async fn save_bank(&self, draft: BankDraft) -> AppResult<Bank> {
        self.uow.banks().save(draft).await
    }

    async fn delete_bank(&self, id: i64) -> AppResult<()> {
        self.uow.banks().delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::{Proposal, ProposalDraft};
    use crate::errors::AppError;
    use crate::infra::{MockBankRepository, MockProposalRepository};
    use crate::services::test_support::TestUnitOfWork;

    fn itau(id: i64) -> Bank {
        Bank {
            id,
            name: "Itau".to_string(),
            proposals: vec![Proposal {
                id: 10,
                name: "Loan A".to_string(),
                bank_id: id,
            }],
        }
    }

    fn service(banks: MockBankRepository) -> BankManager<TestUnitOfWork> {
        BankManager::new(TestUnitOfWork::new(banks, MockProposalRepository::new()))
    }

    #[tokio::test]
    async fn test_get_bank_found() {
        let mut repo = MockBankRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(itau(id))));

        let bank = service(repo).get_bank(1).await.unwrap();
        assert_eq!(bank, Some(itau(1)));
    }

    #[tokio::test]
    async fn test_get_bank_absent_is_none() {
        let mut repo = MockBankRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let bank = service(repo).get_bank(999).await.unwrap();
        assert!(bank.is_none());
    }

    #[tokio::test]
    async fn test_list_banks() {
        let mut repo = MockBankRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![itau(1), itau(2)]));

        let banks = service(repo).list_banks().await.unwrap();
        assert_eq!(banks.len(), 2);
    }

    #[tokio::test]
    async fn test_save_bank_passes_draft_through() {
        let mut repo = MockBankRepository::new();
        repo.expect_save()
            .withf(|draft: &BankDraft| {
                draft.id.is_none()
                    && draft.name == "Itau"
                    && draft.proposals == vec![ProposalDraft::new("Loan A")]
            })
            .times(1)
            .returning(|_| Ok(itau(1)));

        let draft = BankDraft::new("Itau").with_proposals(vec![ProposalDraft::new("Loan A")]);
        let saved = service(repo).save_bank(draft).await;

        tokio_test::assert_ok!(&saved);
        assert_eq!(saved.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_save_bank_propagates_errors() {
        let mut repo = MockBankRepository::new();
        repo.expect_save().returning(|_| {
            Err(AppError::from(sea_orm::DbErr::Custom(
                "NOT NULL constraint failed".into(),
            )))
        });

        let result = service(repo).save_bank(BankDraft::new("")).await;
        tokio_test::assert_err!(&result);
        assert!(matches!(result.unwrap_err(), AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_delete_bank() {
        let mut repo = MockBankRepository::new();
        repo.expect_delete_by_id()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete_bank(4).await.is_ok());
    }
}
