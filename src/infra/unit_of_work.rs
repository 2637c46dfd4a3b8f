//! Unit of Work pattern implementation.
//!
//! Centralizes access to the repositories over one shared connection pool.
//! Multi-row writes (bank save, bank delete) are atomic inside the bank
//! repository itself, so services never open transactions of their own.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{BankRepository, BankStore, ProposalRepository, ProposalStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get bank repository
    fn banks(&self) -> Arc<dyn BankRepository>;

    /// Get proposal repository
    fn proposals(&self) -> Arc<dyn ProposalRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    bank_repo: Arc<BankStore>,
    proposal_repo: Arc<ProposalStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            bank_repo: Arc::new(BankStore::new(db.clone())),
            proposal_repo: Arc::new(ProposalStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn banks(&self) -> Arc<dyn BankRepository> {
        self.bank_repo.clone()
    }

    fn proposals(&self) -> Arc<dyn ProposalRepository> {
        self.proposal_repo.clone()
    }
}
