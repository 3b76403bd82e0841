use std::fmt;
use std::sync::Arc;

use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PokeApiError {
    #[error("{context}: {status}")]
    Http { status: u16, context: String },

    #[error("Network Error: {0}")]
    Network(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(Arc<serde_json::Error>),

    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl PokeApiError {
    /// Status code carried by an HTTP error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PokeApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PokeApiError::Validation(_))
    }
}

impl From<reqwest::Error> for PokeApiError {
    fn from(err: reqwest::Error) -> Self {
        PokeApiError::Network(Arc::new(err))
    }
}

/// Splits decoding failures: syntax errors mean the body was not JSON at all,
/// data errors mean it was JSON of the wrong shape.
impl From<serde_json::Error> for PokeApiError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => PokeApiError::Validation(ValidationError::from(err)),
            _ => PokeApiError::Json(Arc::new(err)),
        }
    }
}

/// First structural mismatch found while validating a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    reason: String,
    position: Option<(usize, usize)>,
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            position: None,
        }
    }

    /// What did not match, without location information.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Line and column of the mismatch when the input was raw text.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.position
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some((line, column)) => {
                write!(f, "{} at line {} column {}", self.reason, line, column)
            }
            None => f.write_str(&self.reason),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends the position to its message; keep them apart.
        let message = err.to_string();
        let (line, column) = (err.line(), err.column());
        if line == 0 {
            return ValidationError::new(message);
        }
        let suffix = format!(" at line {line} column {column}");
        let reason = message
            .strip_suffix(&suffix)
            .map(str::to_string)
            .unwrap_or(message);
        ValidationError {
            reason,
            position: Some((line, column)),
        }
    }
}

pub type Result<T> = std::result::Result<T, PokeApiError>;
