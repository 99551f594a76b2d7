//! Error types for DeepL operations

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Status code DeepL uses when the account's character quota is used up.
pub const QUOTA_EXCEEDED: u16 = 456;

/// A non-success HTTP status returned by the DeepL API.
///
/// Translation calls leave `body` empty; glossary calls capture the raw
/// response body so the service's explanation shows up in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code returned by DeepL
    pub code: u16,
    /// Raw response body, when captured
    pub body: Option<String>,
}

impl ApiError {
    /// Create an error that carries only the status code
    pub fn new(code: u16) -> Self {
        Self { code, body: None }
    }

    /// Create an error that carries the status code and the response body
    pub fn with_body(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: Some(body.into()),
        }
    }

    /// Whether DeepL rejected the request because the character limit was reached
    pub fn is_quota_exceeded(&self) -> bool {
        self.code == QUOTA_EXCEEDED
    }

    fn status_text(&self) -> String {
        StatusCode::from_u16(self.code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| self.code.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_quota_exceeded() {
            return write!(f, "Quota exceeded. The character limit has been reached.");
        }

        match self.body.as_deref().map(str::trim) {
            Some(body) if !body.is_empty() => {
                write!(f, "unexpected HTTP status {} ({})", self.status_text(), body)
            }
            _ => write!(f, "unexpected HTTP status {}", self.status_text()),
        }
    }
}

impl std::error::Error for ApiError {}

/// A glossary TSV line that does not hold exactly one source and one target
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected 2 tab-separated values on line {line_number}, got {line:?}")]
pub struct MalformedEntry {
    /// 1-based line number within the decoded input
    pub line_number: usize,
    /// The offending line
    pub line: String,
}

/// Errors returned by [`DeeplClient`](crate::core::client::DeeplClient) operations
#[derive(Error, Debug)]
pub enum DeeplError {
    /// A request URL could not be built from the configured endpoints
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    /// A header value (usually the auth key) is not a valid HTTP header
    #[error("invalid request header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The transport failed to complete the round trip
    #[error("do request: {0}")]
    Transport(#[from] reqwest::Error),

    /// DeepL answered with an unexpected status code
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response did not contain the expected JSON
    #[error("decode deepl response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A glossary entries response was not valid UTF-8
    #[error("decode glossary entries: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A glossary entries response contained a malformed TSV line
    #[error("decode glossary entries: {0}")]
    MalformedEntry(#[from] MalformedEntry),

    /// DeepL answered a single-text request without any translation
    #[error("deepl responded with no translations")]
    NoTranslation,
}

impl DeeplError {
    /// The remote rejection behind this error, if DeepL returned one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            DeeplError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for DeepL operations
pub type Result<T> = std::result::Result<T, DeeplError>;
