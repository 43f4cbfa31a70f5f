// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the portal client
//!
//! Every primitive (resolver, form extractor, request layer) reports failures
//! through this type; the policy of aborting the whole run on any of them
//! belongs to the caller, not to this crate.

use thiserror::Error;

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the portal client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connect, TLS handshake, bad identity PEM, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing or reference resolution failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The portal answered outside the 2xx range.
    ///
    /// The full response body is carried along: the portal's error bodies are
    /// the primary debugging aid for opaque failures.
    #[error("{method} {url}: expected HTTP 2xx status, got {status}\n{body}")]
    UnexpectedStatus {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    /// Response body was not valid JSON or did not match the expected shape
    #[error("could not decode JSON response from {url}: {reason}\nAPI response:\n{body}")]
    JsonDecode {
        url: String,
        reason: String,
        body: String,
    },

    /// A login page contained more than one form
    #[error("ambiguous document: {0}")]
    AmbiguousDocument(String),

    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// A build log archive could not be read
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an unexpected-status error
    pub fn status(
        method: impl Into<String>,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Error::UnexpectedStatus {
            method: method.into(),
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a JSON decode error
    pub fn json_decode(
        url: impl Into<String>,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Error::JsonDecode {
            url: url.into(),
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Create an ambiguous-document error
    pub fn ambiguous<S: Into<String>>(msg: S) -> Self {
        Error::AmbiguousDocument(msg.into())
    }

    /// Get the HTTP status code if this error carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|s| (500..600).contains(&s))
    }
}
