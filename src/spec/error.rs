use crate::http;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Which parameter collection a parameter was registered in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParamKind {
    Path,
    Query,
}

impl Display for ParamKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamKind::Path => "path".fmt(f),
            ParamKind::Query => "query".fmt(f),
        }
    }
}

/// Errors detected while building a [`CallSpec`](super::CallSpec). These never involve any
/// network activity.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Required field '{0}' was not set")]
    MissingField(&'static str),
    #[error("Path placeholder '{{{0}}}' is not a valid parameter name")]
    InvalidPlaceholder(String),
    #[error("Path placeholder '{{{0}}}' has no matching path parameter")]
    MissingPathParameter(String),
    #[error("Path parameter '{0}' is not referenced by the path template")]
    UnusedPathParameter(String),
    #[error("The {kind} parameter '{name}' was registered more than once")]
    DuplicateParameter { kind: ParamKind, name: String },
    #[error("The {kind} parameter '{name}' has no value")]
    EmptyParameter { kind: ParamKind, name: String },
    #[error("Failed to serialize request body: {0}")]
    Body(#[source] serde_json::Error),
}

/// Errors produced when a response document does not have the expected shape.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Field '{path}' not found in response")]
    FieldNotFound { path: String },
    #[error("Field '{path}' is null")]
    NullValue { path: String },
    #[error("Expected at least one element in list '{path}'")]
    EmptyResult { path: String },
    #[error("Expected an object at '{path}'")]
    NotAnObject { path: String },
    #[error("Expected a list at '{path}'")]
    NotAList { path: String },
    #[error("Failed to decode '{path}': {source}")]
    TypeMismatch {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Response body is not valid json: {0}")]
    MalformedBody(#[source] serde_json::Error),
}

impl ExtractionError {
    /// Whether the error means the requested value is absent rather than malformed.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            ExtractionError::FieldNotFound { .. } | ExtractionError::NullValue { .. }
        )
    }
}

/// Errors returned from executing a [`CallSpec`](super::CallSpec).
#[derive(Debug, Error)]
pub enum CallError<E> {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] http::Error),
    /// The server answered with a non-2xx status. `error` holds the decoded error payload when
    /// the body could be decoded by the error extractor.
    #[error("API error (http {status})")]
    Api { status: u16, error: Option<E> },
    /// The server answered with success but the body did not have the expected shape.
    #[error("{0}")]
    Extraction(#[from] ExtractionError),
}

impl<E> CallError<E> {
    /// Http status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            CallError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded API error payload, if any.
    pub fn api_error(&self) -> Option<&E> {
        match self {
            CallError::Api { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}
