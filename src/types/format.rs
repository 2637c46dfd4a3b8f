//! Payload format negotiation (JSON / XML).

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use serde::{de::DeserializeOwned, ser::SerializeStruct, Serialize, Serializer};

use crate::config::{MIME_JSON, MIME_TEXT_XML, MIME_XML};
use crate::errors::{AppError, AppResult};

/// Wire format of a request or response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Map a single media type (parameters allowed) to a format.
    fn from_media_type(value: &str) -> Option<Self> {
        let essence = value.split(';').next().unwrap_or_default().trim();

        if essence.eq_ignore_ascii_case(MIME_JSON) {
            Some(Format::Json)
        } else if essence.eq_ignore_ascii_case(MIME_XML) || essence.eq_ignore_ascii_case(MIME_TEXT_XML) {
            Some(Format::Xml)
        } else {
            None
        }
    }

    /// Format of a request body, from its `Content-Type`. JSON when absent.
    pub fn from_content_type(headers: &HeaderMap) -> Self {
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::from_media_type)
            .unwrap_or_default()
    }

    /// Preferred response format: the first recognised media type in `Accept`.
    pub fn from_accept(headers: &HeaderMap) -> Self {
        headers
            .get_all(header::ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .find_map(Self::from_media_type)
            .unwrap_or_default()
    }

    /// `Content-Type` value for bodies in this format
    pub fn content_type(self) -> &'static str {
        match self {
            Format::Json => MIME_JSON,
            Format::Xml => MIME_XML,
        }
    }

    /// Decode a request body.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> AppResult<T> {
        match self {
            Format::Json => serde_json::from_slice(bytes)
                .map_err(|e| AppError::validation(format!("JSON inválido: {}", e))),
            Format::Xml => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| AppError::validation(format!("XML inválido: {}", e)))?;
                quick_xml::de::from_str(text)
                    .map_err(|e| AppError::validation(format!("XML inválido: {}", e)))
            }
        }
    }

    /// Encode one record; `root` names the XML element.
    pub fn encode_one<T: Serialize>(self, root: &str, value: &T) -> AppResult<String> {
        match self {
            Format::Json => serde_json::to_string(value).map_err(|e| AppError::internal(e.to_string())),
            Format::Xml => quick_xml::se::to_string_with_root(root, value)
                .map_err(|e| AppError::internal(e.to_string())),
        }
    }

    /// Encode a list; in XML every record is an `item` element under `root`.
    pub fn encode_list<T: Serialize>(
        self,
        root: &str,
        item: &'static str,
        values: &[T],
    ) -> AppResult<String> {
        match self {
            Format::Json => serde_json::to_string(values).map_err(|e| AppError::internal(e.to_string())),
            Format::Xml => quick_xml::se::to_string_with_root(root, &XmlList { item, values })
                .map_err(|e| AppError::internal(e.to_string())),
        }
    }
}

/// Serializes as a single field named `item` holding the whole sequence,
/// which quick-xml renders as one `item` element per value.
struct XmlList<'a, T> {
    item: &'static str,
    values: &'a [T],
}

impl<T: Serialize> Serialize for XmlList<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut list = serializer.serialize_struct("XmlList", 1)?;
        list.serialize_field(self.item, self.values)?;
        list.end()
    }
}

/// Extracts the response format from the `Accept` header.
#[async_trait]
impl<S> FromRequestParts<S> for Format
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Format::from_accept(&parts.headers))
    }
}
