//! Validated payload extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;
use crate::types::Format;

/// Request body extractor that decodes JSON or XML (by `Content-Type`)
/// and validates the result.
///
/// # Example
///
/// ```rust,ignore
/// use banco_proposta::api::extractors::ValidatedPayload;
/// use banco_proposta::domain::BankRequest;
///
/// async fn create_bank(ValidatedPayload(payload): ValidatedPayload<BankRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = Format::from_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value: T = format.decode(&bytes)?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedPayload(value))
    }
}

/// Format validation errors (nested records included) into a user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.sort();
    messages.dedup();
    messages.join(", ")
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => out.extend(errs.iter().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })),
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BankRequest, ProposalRequest};

    #[test]
    fn test_nested_messages_are_reported() {
        let request = BankRequest {
            id: None,
            nome: Some("Itau".to_string()),
            propostas: vec![ProposalRequest::default()],
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "O nome da proposta é obrigatório"
        );
    }

    #[test]
    fn test_empty_name_message() {
        let request = ProposalRequest {
            id: None,
            nome: Some(String::new()),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "O nome da proposta é obrigatório"
        );
    }
}
