use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::sentiment::SentimentLabel;

/// Placeholder text shown wherever a page yielded nothing usable.
pub const NO_CONTENT: &str = "no content available";

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("search query is empty")]
    EmptyQuery,
}

/// A user-supplied search query, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a single page fetch produced no body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchFailure {
    /// DNS, connect, TLS, timeout, or body-read fault.
    Network { reason: String },
    /// The server answered with a non-2xx status.
    HttpStatus { status: u16, reason: String },
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network { reason } => write!(f, "network error: {reason}"),
            FetchFailure::HttpStatus { status, reason } if reason.is_empty() => {
                write!(f, "HTTP {status}")
            }
            FetchFailure::HttpStatus { status, reason } => write!(f, "HTTP {status} {reason}"),
        }
    }
}

/// Result of fetching one candidate URL. All-or-nothing: there is no partial body.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success { body: String },
    Failure(FetchFailure),
}

/// Readable text pulled from a page, or the no-content sentinel.
///
/// `NoContent` covers both a failed fetch and a page with no paragraph text;
/// the two are deliberately indistinguishable here. Use [`PageStatus`] when
/// the difference matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    Content(String),
    NoContent,
}

// Serialized as a plain string; the sentinel is written as its placeholder text.
impl Serialize for ExtractedText {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl ExtractedText {
    /// Wrap extracted text, collapsing an empty or blank string into `NoContent`.
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            ExtractedText::NoContent
        } else {
            ExtractedText::Content(text)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExtractedText::Content(s) => s,
            ExtractedText::NoContent => NO_CONTENT,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, ExtractedText::Content(_))
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a page fared in the batch, kept alongside its text for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PageStatus {
    Fetched,
    Failed(FetchFailure),
    /// The fetch or parse task panicked; the slot was isolated.
    Aborted,
}

/// Tally of page outcomes across one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchStats {
    pub total: usize,
    pub fetched: usize,
    pub network_errors: usize,
    pub http_errors: usize,
    pub aborted: usize,
    /// Fetched pages whose extraction came back empty.
    pub empty_pages: usize,
}

/// One row of the final run report.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRecord {
    pub url: String,
    #[serde(flatten)]
    pub status: PageStatus,
    pub text: ExtractedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SentimentLabel>,
}
