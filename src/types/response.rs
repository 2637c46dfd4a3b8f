use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::Format;
use crate::errors::AppResult;

/// Read response encoded in the negotiated format.
#[derive(Debug)]
pub struct Negotiated {
    pub format: Format,
    pub body: String,
}

impl Negotiated {
    /// Single record under the XML element `root`
    pub fn one<T: Serialize>(format: Format, root: &str, value: &T) -> AppResult<Self> {
        Ok(Self {
            format,
            body: format.encode_one(root, value)?,
        })
    }

    /// List of records, `item` elements under `root` in XML
    pub fn list<T: Serialize>(
        format: Format,
        root: &str,
        item: &'static str,
        values: &[T],
    ) -> AppResult<Self> {
        Ok(Self {
            format,
            body: format.encode_list(root, item, values)?,
        })
    }
}

impl IntoResponse for Negotiated {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.format.content_type())],
            self.body,
        )
            .into_response()
    }
}

/// Plain-text status message (write endpoints)
#[derive(Debug)]
pub struct Message(pub StatusCode, pub &'static str);

impl Message {
    pub fn ok(text: &'static str) -> Self {
        Self(StatusCode::OK, text)
    }

    pub fn created(text: &'static str) -> Self {
        Self(StatusCode::CREATED, text)
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> Response {
        (
            self.0,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.1,
        )
            .into_response()
    }
}
