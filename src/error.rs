//! HTTP-facing error type for `bookshelf`.
//!
//! Store rejections are tagged with the operation that produced them so the
//! client sees an operation-specific message, and every failure is rendered
//! in the `{status: "fail", message}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_lib::BookshelfError;
use thiserror::Error;
use tracing::warn;

use crate::http::response::Envelope;

/// Book operation a request was performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Get,
    Update,
    Delete,
}

impl Operation {
    const fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} book", self.verb())
    }
}

/// Error returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The store rejected the operation.
    #[error("Failed to {op}: {source}")]
    Store {
        op: Operation,
        #[source]
        source: BookshelfError,
    },

    /// Body was not a JSON object of the expected shape.
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// No route matches the request.
    #[error("Route not found: {0}")]
    RouteNotFound(String),
}

impl ApiError {
    #[must_use]
    pub const fn store(op: Operation, source: BookshelfError) -> Self {
        Self::Store { op, source }
    }

    /// Closure for `map_err` that tags a store error with `op`.
    pub fn during(op: Operation) -> impl FnOnce(BookshelfError) -> Self {
        move |source| Self::store(op, source)
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store {
                source: BookshelfError::Validation { .. },
                ..
            }
            | Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Store {
                source: BookshelfError::BookNotFound { .. },
                ..
            }
            | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Client-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Store { op, source } => store_message(*op, source),
            Self::InvalidPayload(detail) => format!("Invalid request payload: {detail}"),
            Self::RouteNotFound(_) => "Not found".to_string(),
        }
    }
}

fn store_message(op: Operation, source: &BookshelfError) -> String {
    let verb = op.verb();
    match (op, source) {
        (Operation::Get, BookshelfError::BookNotFound { .. }) => "Book not found".to_string(),
        (_, BookshelfError::BookNotFound { .. }) => format!("Failed to {verb} book. Id not found"),
        (_, BookshelfError::Validation { field, .. }) if field == "name" => {
            format!("Failed to {verb} book. Please provide the book name")
        }
        (_, BookshelfError::Validation { field, .. }) if field == "readPage" => {
            format!("Failed to {verb} book. readPage must not be greater than pageCount")
        }
        (_, BookshelfError::Validation { field, reason }) => {
            format!("Failed to {verb} book. {field} {reason}")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "Request rejected");
        (status, Envelope::<()>::fail(self.message())).into_response()
    }
}

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;
