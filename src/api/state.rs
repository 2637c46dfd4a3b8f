//! Application state shared across handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{BankService, ProposalService, ServiceContainer, Services};

/// Application state shared across handlers.
///
/// Services are injected as trait objects so handlers can be exercised
/// against any implementation.
#[derive(Clone)]
pub struct AppState {
    /// Bank service
    pub bank_service: Arc<dyn BankService>,
    /// Proposal service
    pub proposal_service: Arc<dyn ProposalService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database, wiring services through
    /// the ServiceContainer.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            bank_service: container.banks(),
            proposal_service: container.proposals(),
            database,
        }
    }
}
