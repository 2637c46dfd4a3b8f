//! Bank domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::proposal::{Proposal, ProposalDraft, ProposalRequest, ProposalSummary};

/// Bank domain entity with its proposals.
///
/// `proposals` is derived from the proposals referencing this bank, in id
/// order; it is never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub id: i64,
    pub name: String,
    pub proposals: Vec<Proposal>,
}

/// Bank data to persist (full overwrite).
///
/// Saving a draft makes the stored proposal set of the bank equal to
/// `proposals`: listed proposals are upserted, unlisted ones are deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDraft {
    pub id: Option<i64>,
    pub name: String,
    pub proposals: Vec<ProposalDraft>,
}

impl BankDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            proposals: Vec::new(),
        }
    }

    pub fn with_proposals(mut self, proposals: Vec<ProposalDraft>) -> Self {
        self.proposals = proposals;
        self
    }
}

/// Bank payload accepted by the API (JSON or XML).
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BankRequest {
    /// Bank ID (required to overwrite an existing bank)
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Bank name
    #[validate(
        required(message = "O nome do banco é obrigatório"),
        length(min = 1, message = "O nome do banco é obrigatório")
    )]
    #[schema(example = "Itau")]
    pub nome: Option<String>,
    /// Proposals owned by the bank
    #[serde(default)]
    #[validate(nested)]
    pub propostas: Vec<ProposalRequest>,
}

impl From<BankRequest> for BankDraft {
    fn from(request: BankRequest) -> Self {
        Self {
            id: request.id,
            name: request.nome.unwrap_or_default(),
            proposals: request
                .propostas
                .into_iter()
                .map(ProposalDraft::from)
                .collect(),
        }
    }
}

/// Bank response with its proposals embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BankResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Itau")]
    pub nome: String,
    #[serde(default)]
    pub propostas: Vec<ProposalSummary>,
}

impl From<Bank> for BankResponse {
    fn from(bank: Bank) -> Self {
        Self {
            id: bank.id,
            nome: bank.name,
            propostas: bank
                .proposals
                .into_iter()
                .map(ProposalSummary::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_into_draft() {
        let request: BankRequest = serde_json::from_str(
            r#"{"nome":"Itau","propostas":[{"nome":"Loan A"},{"id":7,"nome":"Loan B"}]}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let draft = BankDraft::from(request);
        assert_eq!(draft.id, None);
        assert_eq!(draft.name, "Itau");
        assert_eq!(
            draft.proposals,
            vec![
                ProposalDraft::new("Loan A"),
                ProposalDraft::with_id(7, "Loan B"),
            ]
        );
    }

    #[test]
    fn test_request_without_proposals_defaults_to_empty() {
        let request: BankRequest = serde_json::from_str(r#"{"id":3,"nome":"Bradesco"}"#).unwrap();

        assert_eq!(request.id, Some(3));
        assert!(request.propostas.is_empty());
    }

    #[test]
    fn test_nested_proposal_validation() {
        let request: BankRequest =
            serde_json::from_str(r#"{"nome":"Itau","propostas":[{"nome":""}]}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_name_is_invalid() {
        let request: BankRequest = serde_json::from_str(r#"{"propostas":[]}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_omits_back_reference() {
        let bank = Bank {
            id: 1,
            name: "Itau".to_string(),
            proposals: vec![Proposal {
                id: 1,
                name: "Loan A".to_string(),
                bank_id: 1,
            }],
        };

        let json = serde_json::to_value(BankResponse::from(bank)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "nome": "Itau",
                "propostas": [{ "id": 1, "nome": "Loan A" }]
            })
        );
    }
}
