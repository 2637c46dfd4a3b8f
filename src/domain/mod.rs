//! Domain layer - Core business entities and logic
//!
//! Banks own proposals through the proposal's `bank_id`. Entities are
//! independent of persistence; request/response types define the wire shape.

pub mod bank;
pub mod proposal;

pub use bank::{Bank, BankDraft, BankRequest, BankResponse};
pub use proposal::{Proposal, ProposalDraft, ProposalRequest, ProposalResponse, ProposalSummary};
