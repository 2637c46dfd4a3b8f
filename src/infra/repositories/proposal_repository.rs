//! Proposal repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::base::{DeleteRepository, ReadRepository};
use super::entities::proposal::{self, ActiveModel, Entity as ProposalEntity};
use crate::domain::{Proposal, ProposalDraft};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Proposal repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// List every proposal, in id order
    async fn find_all(&self) -> AppResult<Vec<Proposal>>;

    /// List the proposals owned by a bank, in id order
    async fn find_by_bank(&self, bank_id: i64) -> AppResult<Vec<Proposal>>;

    /// Find proposal by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Proposal>>;

    /// Insert or fully overwrite a proposal owned by `bank_id`
    async fn save(&self, bank_id: i64, draft: ProposalDraft) -> AppResult<Proposal>;

    /// Delete proposal by ID (no-op when absent)
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ProposalRepository
pub struct ProposalStore {
    db: DatabaseConnection,
}

impl ProposalStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<ProposalEntity, proposal::Model> for ProposalStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<ProposalEntity> for ProposalStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl ProposalRepository for ProposalStore {
    async fn find_all(&self) -> AppResult<Vec<Proposal>> {
        let models = ProposalEntity::find()
            .order_by_asc(proposal::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Proposal::from).collect())
    }

    async fn find_by_bank(&self, bank_id: i64) -> AppResult<Vec<Proposal>> {
        let models = proposals_of(&self.db, bank_id).await?;
        Ok(models.into_iter().map(Proposal::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Proposal>> {
        Ok(self.find_model(id).await?.map(Proposal::from))
    }

    async fn save(&self, bank_id: i64, draft: ProposalDraft) -> AppResult<Proposal> {
        let model = upsert_proposal(&self.db, bank_id, draft).await?;
        Ok(Proposal::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let removed = self.delete_model(id).await?;
        tracing::debug!(proposal_id = id, removed, "Proposal delete executed");
        Ok(())
    }
}

/// Rows of the proposals owned by `bank_id`, in id order.
pub(super) async fn proposals_of<C>(conn: &C, bank_id: i64) -> Result<Vec<proposal::Model>, DbErr>
where
    C: ConnectionTrait,
{
    ProposalEntity::find()
        .filter(proposal::Column::BancoId.eq(bank_id))
        .order_by_asc(proposal::Column::Id)
        .all(conn)
        .await
}

/// Overwrite the row named by `draft.id`, or insert a new one when the id is
/// unset or unknown. The row is always attached to `bank_id`.
pub(super) async fn upsert_proposal<C>(
    conn: &C,
    bank_id: i64,
    draft: ProposalDraft,
) -> Result<proposal::Model, DbErr>
where
    C: ConnectionTrait,
{
    let existing = match draft.id {
        Some(id) => ProposalEntity::find_by_id(id).one(conn).await?,
        None => None,
    };

    match existing {
        Some(model) => {
            let mut active: ActiveModel = model.into();
            active.nome = Set(draft.name);
            active.banco_id = Set(bank_id);
            active.update(conn).await
        }
        None => {
            ActiveModel {
                nome: Set(draft.name),
                banco_id: Set(bank_id),
                ..Default::default()
            }
            .insert(conn)
            .await
        }
    }
}
