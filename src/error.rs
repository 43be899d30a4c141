/// Error types shared by every operation.
///
/// Two failure classes: local validation errors raised before any HTTP
/// traffic, and remote errors read out of the registry's response envelope.
/// Neither is retried; every failure is terminal for that call.

use std::fmt;
use thiserror::Error;

/// One entry from the registry's `Err{n}` error list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub text: String,
    pub source: Option<String>,
    pub section: Option<String>,
}

/// The full `Err1..ErrN` list from a failed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteErrors(pub Vec<ErrorDetail>);

impl fmt::Display for RemoteErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "unspecified registry error");
        }
        let texts: Vec<&str> = self.0.iter().map(|e| e.text.as_str()).collect();
        write!(f, "{}", texts.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum EnomError {
    #[error("HTTP error: {0}")]
    Http(String),

    /// RRP status code other than a success/queued outcome.
    #[error("registry error {code}: {text}")]
    Api { code: u32, text: String },

    /// Non-zero `ErrCount` envelope.
    #[error("registry error: {0}")]
    Remote(RemoteErrors),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("malformed response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, EnomError>;
