use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// A single field level complaint inside an [`HttpError`].
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

/// Representation of the error payload returned by the XING API on non-2xx responses.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct HttpError {
    /// Machine readable error name, e.g. `INVALID_PARAMETERS`.
    pub error_name: String,
    /// Optional human readable message.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(m) => write!(f, "{}: {m}", self.error_name),
            None => self.error_name.fmt(f),
        }
    }
}

impl std::error::Error for HttpError {}
