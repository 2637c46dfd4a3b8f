//! Bank repository implementation.
//!
//! A bank's proposals are always read through `proposta.banco_id`. Saving a
//! bank replaces its proposal set, deleting any proposal the new set no
//! longer lists; deleting a bank deletes its proposals first. Both run in a
//! single transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::base::ReadRepository;
use super::entities::bank::{self, ActiveModel, Entity as BankEntity};
use super::entities::proposal::{self, Entity as ProposalEntity};
use super::proposal_repository::{proposals_of, upsert_proposal};
use crate::domain::{Bank, BankDraft};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Bank repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// List every bank with its proposals, in id order
    async fn find_all(&self) -> AppResult<Vec<Bank>>;

    /// Find bank (with proposals) by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Bank>>;

    /// Insert or fully overwrite a bank and its proposal set
    async fn save(&self, draft: BankDraft) -> AppResult<Bank>;

    /// Delete bank and all its proposals (no-op when absent)
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of BankRepository
pub struct BankStore {
    db: DatabaseConnection,
}

impl BankStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<BankEntity, bank::Model> for BankStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl BankRepository for BankStore {
    async fn find_all(&self) -> AppResult<Vec<Bank>> {
        let banks = BankEntity::find()
            .order_by_asc(bank::Column::Id)
            .all(&self.db)
            .await?;

        let mut owned: HashMap<i64, Vec<proposal::Model>> = HashMap::new();
        for model in ProposalEntity::find()
            .order_by_asc(proposal::Column::Id)
            .all(&self.db)
            .await?
        {
            owned.entry(model.banco_id).or_default().push(model);
        }

        Ok(banks
            .into_iter()
            .map(|bank| {
                let proposals = owned.remove(&bank.id).unwrap_or_default();
                bank.into_domain(proposals)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Bank>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let proposals = proposals_of(&self.db, id).await?;
        Ok(Some(model.into_domain(proposals)))
    }

    async fn save(&self, draft: BankDraft) -> AppResult<Bank> {
        let txn = self.db.begin().await?;

        let bank = upsert_bank(&txn, draft.id, draft.name).await?;

        let mut kept = Vec::with_capacity(draft.proposals.len());
        for proposal in draft.proposals {
            kept.push(upsert_proposal(&txn, bank.id, proposal).await?.id);
        }

        // Orphan removal: anything the draft no longer lists goes away
        let mut orphans =
            ProposalEntity::delete_many().filter(proposal::Column::BancoId.eq(bank.id));
        if !kept.is_empty() {
            orphans = orphans.filter(proposal::Column::Id.is_not_in(kept));
        }
        let removed = orphans.exec(&txn).await?.rows_affected;

        let proposals = proposals_of(&txn, bank.id).await?;
        txn.commit().await?;

        tracing::debug!(bank_id = bank.id, removed, "Bank saved");
        Ok(bank.into_domain(proposals))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let proposals = ProposalEntity::delete_many()
            .filter(proposal::Column::BancoId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let banks = BankEntity::delete_by_id(id).exec(&txn).await?.rows_affected;

        txn.commit().await?;

        tracing::debug!(bank_id = id, banks, proposals, "Bank delete executed");
        Ok(())
    }
}

/// Overwrite the bank row named by `id`, or insert a new one when the id is
/// unset or unknown.
async fn upsert_bank<C>(conn: &C, id: Option<i64>, name: String) -> Result<bank::Model, DbErr>
where
    C: ConnectionTrait,
{
    let existing = match id {
        Some(id) => BankEntity::find_by_id(id).one(conn).await?,
        None => None,
    };

    match existing {
        Some(model) => {
            let mut active: ActiveModel = model.into();
            active.nome = Set(name);
            active.update(conn).await
        }
        None => {
            ActiveModel {
                nome: Set(name),
                ..Default::default()
            }
            .insert(conn)
            .await
        }
    }
}
