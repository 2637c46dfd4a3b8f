//! Application services layer.
//!
//! Services sit between the HTTP handlers and the repositories. They
//! depend on abstractions (traits) for dependency inversion and reach the
//! repositories through the Unit of Work.

mod bank_service;
pub mod container;
mod proposal_service;

// Service Container
pub use container::{parallel, ServiceContainer, Services};

// Service traits and implementations
pub use bank_service::{BankManager, BankService};
pub use proposal_service::{ProposalManager, ProposalService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
