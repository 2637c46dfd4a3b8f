//! Service Container - Centralized service access.
//!
//! SOLID (DIP): Handlers depend on service traits, not implementations.

use std::future::Future;
use std::sync::Arc;

use super::{BankService, ProposalService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get bank service
    fn banks(&self) -> Arc<dyn BankService>;

    /// Get proposal service
    fn proposals(&self) -> Arc<dyn ProposalService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    bank_service: Arc<dyn BankService>,
    proposal_service: Arc<dyn ProposalService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        bank_service: Arc<dyn BankService>,
        proposal_service: Arc<dyn ProposalService>,
    ) -> Self {
        Self {
            bank_service,
            proposal_service,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{BankManager, ProposalManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            bank_service: Arc::new(BankManager::new(uow.clone())),
            proposal_service: Arc::new(ProposalManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn banks(&self) -> Arc<dyn BankService> {
        self.bank_service.clone()
    }

    fn proposals(&self) -> Arc<dyn ProposalService> {
        self.proposal_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use crate::errors::AppResult;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// Both operations run concurrently and the function returns when both complete.
    /// If either operation fails, the error is returned immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }
}
