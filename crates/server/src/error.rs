// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tip errors and their translation to problem details responses.
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

/// The type URI of invalid data errors.
pub const INVALID_DATA: &str = "https://www.openhud.io/errors/invalid-data";

/// The type URI of internal errors.
pub const INTERNAL: &str = "https://www.openhud.io/errors/internal";

/// Errors raised while generating a tip.
#[derive(Debug, thiserror::Error)]
pub enum TipError {
    /// The request data fails a precondition.
    #[error("{0}")]
    InvalidData(String),
    /// Any other failure.
    #[error("{0}")]
    Internal(String),
}

impl TipError {
    /// Creates an internal error from any displayable error.
    pub fn internal(err: impl ToString) -> Self {
        TipError::Internal(err.to_string())
    }

    /// The problem type URI of this error.
    pub fn type_uri(&self) -> &'static str {
        match self {
            TipError::InvalidData(_) => INVALID_DATA,
            TipError::Internal(_) => INTERNAL,
        }
    }

    /// Translates this error to a status code and a problem details body.
    pub fn to_problem(&self) -> (StatusCode, ProblemDetail) {
        translate(self.type_uri(), &self.to_string())
    }
}

/// An RFC 7807 problem details body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetail {
    /// The problem type URI.
    #[serde(rename = "type")]
    pub type_uri: String,
    /// A short human readable title for the problem type.
    pub title: String,
    /// A human readable explanation of this occurrence.
    pub detail: String,
}

/// Maps a problem type URI to its status code and title, unknown types are
/// internal errors.
fn lookup(type_uri: &str) -> (StatusCode, &'static str) {
    match type_uri {
        INVALID_DATA => (StatusCode::BAD_REQUEST, "Invalid Data"),
        INTERNAL => (StatusCode::INTERNAL_SERVER_ERROR, "Internal"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal"),
    }
}

/// Translates a problem type and detail to a status code and body.
pub fn translate(type_uri: &str, detail: &str) -> (StatusCode, ProblemDetail) {
    let (status, title) = lookup(type_uri);
    let problem = ProblemDetail {
        type_uri: type_uri.to_string(),
        title: title.to_string(),
        detail: detail.to_string(),
    };

    (status, problem)
}

impl ResponseError for TipError {
    fn status_code(&self) -> StatusCode {
        lookup(self.type_uri()).0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, problem) = self.to_problem();
        HttpResponse::build(status).json(problem)
    }
}
