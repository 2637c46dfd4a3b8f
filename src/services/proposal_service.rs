//! Proposal service - Seam over proposal persistence.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Proposal, ProposalDraft};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Proposal service trait for dependency injection.
#[async_trait]
pub trait ProposalService: Send + Sync {
    /// List all proposals
    async fn list_proposals(&self) -> AppResult<Vec<Proposal>>;

    /// List the proposals of one bank
    async fn list_bank_proposals(&self, bank_id: i64) -> AppResult<Vec<Proposal>>;

    /// Get proposal by ID
    async fn get_proposal(&self, id: i64) -> AppResult<Option<Proposal>>;

    /// Insert or fully overwrite a proposal owned by `bank_id`
    async fn save_proposal(&self, bank_id: i64, draft: ProposalDraft) -> AppResult<Proposal>;

    /// Delete proposal by ID
    async fn delete_proposal(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ProposalService using Unit of Work.
pub struct ProposalManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProposalManager<U> {
    /// Create new proposal service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProposalService for ProposalManager<U> {
    async fn list_proposals(&self) -> AppResult<Vec<Proposal>> {
        self.uow.proposals().find_all().await
    }

    async fn list_bank_proposals(&self, bank_id: i64) -> AppResult<Vec<Proposal>> {
        self.uow.proposals().find_by_bank(bank_id).await
    }

    async fn get_proposal(&self, id: i64) -> AppResult<Option<Proposal>> {
        self.uow.proposals().find_by_id(id).await
    }

    async fn save_proposal(&self, bank_id: i64, draft: ProposalDraft) -> AppResult<Proposal> {
        self.uow.proposals().save(bank_id, draft).await
    }

    async fn delete_proposal(&self, id: i64) -> AppResult<()> {
        self.uow.proposals().delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::infra::{MockBankRepository, MockProposalRepository};
    use crate::services::test_support::TestUnitOfWork;

    fn service(proposals: MockProposalRepository) -> ProposalManager<TestUnitOfWork> {
        ProposalManager::new(TestUnitOfWork::new(MockBankRepository::new(), proposals))
    }

    #[tokio::test]
    async fn test_save_proposal_keeps_bank_argument() {
        let mut repo = MockProposalRepository::new();
        repo.expect_save()
            .withf(|bank_id: &i64, draft: &ProposalDraft| {
                *bank_id == 1 && *draft == ProposalDraft::with_id(5, "X")
            })
            .times(1)
            .returning(|bank_id, draft| {
                Ok(Proposal {
                    id: draft.id.unwrap_or(1),
                    name: draft.name,
                    bank_id,
                })
            });

        let saved = service(repo)
            .save_proposal(1, ProposalDraft::with_id(5, "X"))
            .await
            .unwrap();

        assert_eq!(
            saved,
            Proposal {
                id: 5,
                name: "X".to_string(),
                bank_id: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_get_proposal_absent() {
        let mut repo = MockProposalRepository::new();
        repo.expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        assert!(service(repo).get_proposal(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_bank_proposals() {
        let mut repo = MockProposalRepository::new();
        repo.expect_find_by_bank()
            .with(eq(3))
            .returning(|bank_id| {
                Ok(vec![Proposal {
                    id: 1,
                    name: "Loan".to_string(),
                    bank_id,
                }])
            });

        let proposals = service(repo).list_bank_proposals(3).await.unwrap();
        assert_eq!(proposals.len(), 1);
        assert!(proposals[0].belongs_to(3));
    }

    #[tokio::test]
    async fn test_delete_proposal() {
        let mut repo = MockProposalRepository::new();
        repo.expect_delete_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(()));

        tokio_test::assert_ok!(service(repo).delete_proposal(7).await);
    }
}
