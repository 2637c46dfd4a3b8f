//! Proposal domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Proposal domain entity.
///
/// Always owned by exactly one bank; `bank_id` is the only link between the
/// two, so a bank's proposal collection is whatever references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: i64,
    pub name: String,
    pub bank_id: i64,
}

impl Proposal {
    /// Check whether this proposal belongs to the given bank
    pub fn belongs_to(&self, bank_id: i64) -> bool {
        self.bank_id == bank_id
    }
}

/// Proposal data to persist.
///
/// `id = None` inserts a new row; `Some(id)` overwrites that row, or inserts
/// a fresh one when no such row exists. The owning bank is supplied
/// separately by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDraft {
    pub id: Option<i64>,
    pub name: String,
}

impl ProposalDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

/// Proposal payload accepted by the API (JSON or XML).
///
/// Any `banco` reference in the payload is ignored: the owning bank always
/// comes from the request path or the enclosing bank payload.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProposalRequest {
    /// Proposal ID (ignored on nested update, where the path wins)
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Proposal name
    #[validate(
        required(message = "O nome da proposta é obrigatório"),
        length(min = 1, message = "O nome da proposta é obrigatório")
    )]
    #[schema(example = "Empréstimo pessoal")]
    pub nome: Option<String>,
}

impl From<ProposalRequest> for ProposalDraft {
    fn from(request: ProposalRequest) -> Self {
        Self {
            id: request.id,
            name: request.nome.unwrap_or_default(),
        }
    }
}

/// Proposal as embedded in a bank response (no back-reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProposalSummary {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Empréstimo pessoal")]
    pub nome: String,
}

impl From<Proposal> for ProposalSummary {
    fn from(proposal: Proposal) -> Self {
        Self {
            id: proposal.id,
            nome: proposal.name,
        }
    }
}

/// Standalone proposal response, referencing its bank by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProposalResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Empréstimo pessoal")]
    pub nome: String,
    /// Owning bank ID
    #[serde(rename = "bancoId")]
    #[schema(example = 1)]
    pub banco_id: i64,
}

impl From<Proposal> for ProposalResponse {
    fn from(proposal: Proposal) -> Self {
        Self {
            id: proposal.id,
            nome: proposal.name,
            banco_id: proposal.bank_id,
        }
    }
}
