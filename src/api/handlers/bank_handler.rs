//! Bank and nested proposal handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedPayload;
use crate::api::AppState;
use crate::config::{
    BANK_CREATED, BANK_CREATE_FAILED, BANK_DELETED, BANK_NOT_FOUND, BANK_UPDATED,
    BANK_UPDATE_FAILED, PROPOSAL_ADDED, PROPOSAL_CREATE_FAILED, PROPOSAL_NOT_FOUND,
    PROPOSAL_REMOVED, PROPOSAL_UPDATED, PROPOSAL_UPDATE_FAILED, XML_ROOT_BANK,
    XML_ROOT_BANK_LIST, XML_ROOT_PROPOSAL, XML_ROOT_PROPOSAL_LIST,
};
use crate::domain::{
    Bank, BankDraft, BankRequest, BankResponse, Proposal, ProposalDraft, ProposalRequest,
    ProposalResponse,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::services::parallel;
use crate::types::{Format, Message, Negotiated};

/// Create bank routes (nested under the API base path)
pub fn bank_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_banks).post(create_bank).put(update_bank))
        .route("/:id", get(get_bank).delete(delete_bank))
        .route("/:id/proposta", get(list_bank_proposals).post(add_proposal))
        .route(
            "/:id/proposta/:proposta_id",
            get(get_proposal).put(update_proposal).delete(remove_proposal),
        )
}

/// Load a bank or fail with 404
async fn require_bank(state: &AppState, id: i64) -> AppResult<Bank> {
    state
        .bank_service
        .get_bank(id)
        .await?
        .ok_or_not_found(BANK_NOT_FOUND)
}

/// Load a bank and a proposal concurrently; both must exist.
async fn require_bank_and_proposal(
    state: &AppState,
    bank_id: i64,
    proposal_id: i64,
) -> AppResult<(Bank, Proposal)> {
    let (bank, proposal) = parallel::join2(
        state.bank_service.get_bank(bank_id),
        state.proposal_service.get_proposal(proposal_id),
    )
    .await?;

    let bank = bank.ok_or_not_found(BANK_NOT_FOUND)?;
    let proposal = proposal.ok_or_not_found(PROPOSAL_NOT_FOUND)?;

    Ok((bank, proposal))
}

/// Like `require_bank_and_proposal`, but a proposal owned by another bank
/// counts as missing.
async fn require_owned_proposal(
    state: &AppState,
    bank_id: i64,
    proposal_id: i64,
) -> AppResult<(Bank, Proposal)> {
    let (bank, proposal) = require_bank_and_proposal(state, bank_id, proposal_id).await?;

    if !proposal.belongs_to(bank_id) {
        return Err(AppError::not_found(PROPOSAL_NOT_FOUND));
    }

    Ok((bank, proposal))
}

/// List all banks
#[utoipa::path(
    get,
    path = "/api/banco",
    tag = "Bancos",
    responses(
        (status = 200, description = "All banks with their proposals", body = [BankResponse])
    )
)]
pub async fn list_banks(State(state): State<AppState>, format: Format) -> AppResult<Negotiated> {
    let banks: Vec<BankResponse> = state
        .bank_service
        .list_banks()
        .await?
        .into_iter()
        .map(BankResponse::from)
        .collect();

    Negotiated::list(format, XML_ROOT_BANK_LIST, XML_ROOT_BANK, &banks)
}

/// Get bank by ID
#[utoipa::path(
    get,
    path = "/api/banco/{id}",
    tag = "Bancos",
    params(("id" = i64, Path, description = "Bank ID")),
    responses(
        (status = 200, description = "Bank found", body = BankResponse),
        (status = 404, description = "Bank not found")
    )
)]
pub async fn get_bank(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    format: Format,
) -> AppResult<Negotiated> {
    let bank = require_bank(&state, id).await?;
    Negotiated::one(format, XML_ROOT_BANK, &BankResponse::from(bank))
}

/// Create a bank (nested proposals included)
#[utoipa::path(
    post,
    path = "/api/banco",
    tag = "Bancos",
    request_body = BankRequest,
    responses(
        (status = 201, description = "Bank created"),
        (status = 400, description = "Invalid payload or write failure")
    )
)]
pub async fn create_bank(
    State(state): State<AppState>,
    ValidatedPayload(payload): ValidatedPayload<BankRequest>,
) -> AppResult<Message> {
    let bank = state
        .bank_service
        .save_bank(BankDraft::from(payload))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Bank creation failed");
            AppError::write_failed(BANK_CREATE_FAILED, e)
        })?;

    tracing::info!(bank_id = bank.id, proposals = bank.proposals.len(), "Bank created");
    Ok(Message::created(BANK_CREATED))
}

/// Overwrite a bank; its proposal set becomes exactly the payload's
#[utoipa::path(
    put,
    path = "/api/banco",
    tag = "Bancos",
    request_body = BankRequest,
    responses(
        (status = 200, description = "Bank updated"),
        (status = 400, description = "Invalid payload or write failure")
    )
)]
pub async fn update_bank(
    State(state): State<AppState>,
    ValidatedPayload(payload): ValidatedPayload<BankRequest>,
) -> AppResult<Message> {
    let bank = state
        .bank_service
        .save_bank(BankDraft::from(payload))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Bank update failed");
            AppError::write_failed(BANK_UPDATE_FAILED, e)
        })?;

    tracing::info!(bank_id = bank.id, "Bank updated");
    Ok(Message::ok(BANK_UPDATED))
}

/// Delete a bank and all of its proposals
#[utoipa::path(
    delete,
    path = "/api/banco/{id}",
    tag = "Bancos",
    params(("id" = i64, Path, description = "Bank ID")),
    responses(
        (status = 200, description = "Bank deleted"),
        (status = 404, description = "Bank not found")
    )
)]
pub async fn delete_bank(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Message> {
    require_bank(&state, id).await?;
    state.bank_service.delete_bank(id).await?;

    tracing::info!(bank_id = id, "Bank deleted");
    Ok(Message::ok(BANK_DELETED))
}

/// List the proposals of a bank
#[utoipa::path(
    get,
    path = "/api/banco/{id}/proposta",
    tag = "Propostas",
    params(("id" = i64, Path, description = "Bank ID")),
    responses(
        (status = 200, description = "Proposals of the bank", body = [ProposalResponse]),
        (status = 404, description = "Bank not found")
    )
)]
pub async fn list_bank_proposals(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    format: Format,
) -> AppResult<Negotiated> {
    require_bank(&state, id).await?;

    let proposals: Vec<ProposalResponse> = state
        .proposal_service
        .list_bank_proposals(id)
        .await?
        .into_iter()
        .map(ProposalResponse::from)
        .collect();

    Negotiated::list(format, XML_ROOT_PROPOSAL_LIST, XML_ROOT_PROPOSAL, &proposals)
}

/// Add a proposal to a bank
#[utoipa::path(
    post,
    path = "/api/banco/{id}/proposta",
    tag = "Propostas",
    params(("id" = i64, Path, description = "Bank ID")),
    request_body = ProposalRequest,
    responses(
        (status = 201, description = "Proposal added"),
        (status = 400, description = "Invalid payload or write failure"),
        (status = 404, description = "Bank not found")
    )
)]
pub async fn add_proposal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedPayload(payload): ValidatedPayload<ProposalRequest>,
) -> AppResult<Message> {
    require_bank(&state, id).await?;

    let proposal = state
        .proposal_service
        .save_proposal(id, ProposalDraft::from(payload))
        .await
        .map_err(|e| {
            tracing::warn!(bank_id = id, error = %e, "Proposal creation failed");
            AppError::write_failed(PROPOSAL_CREATE_FAILED, e)
        })?;

    tracing::info!(bank_id = id, proposal_id = proposal.id, "Proposal added");
    Ok(Message::created(PROPOSAL_ADDED))
}

/// Get one proposal of a bank
#[utoipa::path(
    get,
    path = "/api/banco/{id}/proposta/{proposta_id}",
    tag = "Propostas",
    params(
        ("id" = i64, Path, description = "Bank ID"),
        ("proposta_id" = i64, Path, description = "Proposal ID")
    ),
    responses(
        (status = 200, description = "Proposal found", body = ProposalResponse),
        (status = 404, description = "Bank or proposal not found")
    )
)]
pub async fn get_proposal(
    State(state): State<AppState>,
    Path((id, proposta_id)): Path<(i64, i64)>,
    format: Format,
) -> AppResult<Negotiated> {
    let (_, proposal) = require_owned_proposal(&state, id, proposta_id).await?;
    Negotiated::one(format, XML_ROOT_PROPOSAL, &ProposalResponse::from(proposal))
}

/// Overwrite a proposal; id and owning bank always come from the path.
///
/// A proposal of another bank is moved to the bank in the path.
#[utoipa::path(
    put,
    path = "/api/banco/{id}/proposta/{proposta_id}",
    tag = "Propostas",
    params(
        ("id" = i64, Path, description = "Bank ID"),
        ("proposta_id" = i64, Path, description = "Proposal ID")
    ),
    request_body = ProposalRequest,
    responses(
        (status = 200, description = "Proposal updated"),
        (status = 400, description = "Invalid payload or write failure"),
        (status = 404, description = "Bank or proposal not found")
    )
)]
pub async fn update_proposal(
    State(state): State<AppState>,
    Path((id, proposta_id)): Path<(i64, i64)>,
    ValidatedPayload(payload): ValidatedPayload<ProposalRequest>,
) -> AppResult<Message> {
    let (_, current) = require_bank_and_proposal(&state, id, proposta_id).await?;
    if !current.belongs_to(id) {
        tracing::info!(
            from = current.bank_id,
            to = id,
            proposal_id = proposta_id,
            "Proposal reassigned"
        );
    }

    let draft = ProposalDraft {
        id: Some(proposta_id),
        ..ProposalDraft::from(payload)
    };

    state
        .proposal_service
        .save_proposal(id, draft)
        .await
        .map_err(|e| {
            tracing::warn!(bank_id = id, proposal_id = proposta_id, error = %e, "Proposal update failed");
            AppError::write_failed(PROPOSAL_UPDATE_FAILED, e)
        })?;

    tracing::info!(bank_id = id, proposal_id = proposta_id, "Proposal updated");
    Ok(Message::ok(PROPOSAL_UPDATED))
}

/// Remove a proposal from its bank (the proposal is deleted)
#[utoipa::path(
    delete,
    path = "/api/banco/{id}/proposta/{proposta_id}",
    tag = "Propostas",
    params(
        ("id" = i64, Path, description = "Bank ID"),
        ("proposta_id" = i64, Path, description = "Proposal ID")
    ),
    responses(
        (status = 200, description = "Proposal removed"),
        (status = 404, description = "Bank or proposal not found")
    )
)]
pub async fn remove_proposal(
    State(state): State<AppState>,
    Path((id, proposta_id)): Path<(i64, i64)>,
) -> AppResult<Message> {
    require_owned_proposal(&state, id, proposta_id).await?;
    state.proposal_service.delete_proposal(proposta_id).await?;

    tracing::info!(bank_id = id, proposal_id = proposta_id, "Proposal removed");
    Ok(Message::ok(PROPOSAL_REMOVED))
}
