use std::fmt;

use scout_core::{ParsedResumeData, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisFinished(Result<ParsedResumeData, ServiceError>),
    SearchFinished(Result<SearchResult, ServiceError>),
}

/// Why a remote call produced no usable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The resume could not be read or encoded.
    Encoding,
    /// The request body could not be built.
    InvalidRequest,
    Network,
    Timeout,
    HttpStatus(u16),
    /// The service answered without any text.
    EmptyResponse,
    /// The body was not the expected envelope.
    MalformedResponse,
    /// The generated JSON did not match the declared output schema.
    SchemaViolation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Encoding => write!(f, "encoding failure"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::EmptyResponse => write!(f, "empty response"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::SchemaViolation => write!(f, "schema violation"),
        }
    }
}

/// The engine thread is gone; the command was not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("engine thread has stopped")]
pub struct EngineStopped;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            FailureKind::Timeout
        } else {
            FailureKind::Network
        };
        ServiceError::new(kind, err.to_string())
    }
}
