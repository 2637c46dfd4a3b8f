//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod bank_repository;
mod base;
pub(crate) mod entities;
mod proposal_repository;

pub use bank_repository::{BankRepository, BankStore};
pub use base::{DeleteRepository, ReadRepository};
pub use proposal_repository::{ProposalRepository, ProposalStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use bank_repository::MockBankRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use proposal_repository::MockProposalRepository;
