//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{bank_handler, health_handler};
use crate::domain::{
    BankRequest, BankResponse, ProposalRequest, ProposalResponse, ProposalSummary,
};

/// OpenAPI documentation for the bank / proposal service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Banco Proposta API",
        version = "0.1.0",
        description = "Banks and the proposals they own. Bodies in JSON or XML.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Bank endpoints
        bank_handler::list_banks,
        bank_handler::get_bank,
        bank_handler::create_bank,
        bank_handler::update_bank,
        bank_handler::delete_bank,
        // Nested proposal endpoints
        bank_handler::list_bank_proposals,
        bank_handler::add_proposal,
        bank_handler::get_proposal,
        bank_handler::update_proposal,
        bank_handler::remove_proposal,
        // Health
        health_handler::health,
    ),
    components(
        schemas(
            BankRequest,
            BankResponse,
            ProposalRequest,
            ProposalResponse,
            ProposalSummary,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Bancos", description = "Bank management"),
        (name = "Propostas", description = "Proposals nested under a bank"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_bank_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/banco"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/banco/{id}/proposta/{proposta_id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
