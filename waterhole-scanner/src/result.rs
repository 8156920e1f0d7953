use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a request failed before a status code came back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// DNS failure, refused connection or TLS handshake failure
    ConnectionError,
    Timeout,
    /// Everything else: bad URL, redirect loop, body errors
    Other,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConnectionError => "CONNECTION_ERROR",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target that answered with any HTTP status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub http_response: u16,
    pub website: String,
}

/// A target whose request failed without a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRow {
    pub error_type: ErrorKind,
    pub website: String,
}

/// Outcome of probing a single target. Exactly one per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Response(ResultRow),
    Failure(ErrorRow),
}

impl ProbeOutcome {
    pub fn website(&self) -> &str {
        match self {
            ProbeOutcome::Response(row) => &row.website,
            ProbeOutcome::Failure(row) => &row.website,
        }
    }

    pub fn is_response(&self) -> bool {
        matches!(self, ProbeOutcome::Response(_))
    }
}

/// Both output tables, in probe order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub results: Vec<ResultRow>,
    pub errors: Vec<ErrorRow>,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: ProbeOutcome) {
        match outcome {
            ProbeOutcome::Response(row) => self.results.push(row),
            ProbeOutcome::Failure(row) => self.errors.push(row),
        }
    }

    pub fn total(&self) -> usize {
        self.results.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
