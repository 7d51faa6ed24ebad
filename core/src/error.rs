//! Error types for the webget client core.
//!
//! # Design
//! One variant per distinct failure the URL parser and response parser can
//! detect, each carrying the offending input where there is one. Errors are
//! raised at the point of detection and propagate unmodified to the caller;
//! there is no recovery, no partial result, and no retry anywhere in the
//! core. `Io` wraps transport-level read failures surfaced by the line
//! source so they travel through the same channel.

use std::fmt;
use std::io;

/// Errors returned by `Url::parse` and `parse_response`.
#[derive(Debug)]
pub enum FetchError {
    /// The URL scheme is not `http`. Carries the scheme as decomposed,
    /// which may be empty for scheme-less input.
    UnsupportedScheme(String),

    /// No hostname could be extracted from the URL authority.
    MissingHostname(Option<String>),

    /// The URL authority contains no `.` — rejected by the domain-shape
    /// heuristic (this also rejects single-label hosts like `localhost`).
    InvalidNetloc(String),

    /// The response stream ended before a status line could be read.
    EmptyStatusLine,

    /// A status or header line is missing a required delimiter or field.
    MalformedLine(String),

    /// The status-line code field is not an integer.
    InvalidStatus(String),

    /// The server reported an error status (>= 400).
    StatusCode(i32),

    /// The response carries a `Transfer-Encoding` header; chunked or
    /// otherwise framed bodies are unsupported.
    TransferEncoding,

    /// The response carries a `Content-Encoding` header; compressed
    /// bodies are unsupported.
    ContentEncoding,

    /// The line source failed to read, or yielded non-UTF-8 bytes.
    Io(io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::UnsupportedScheme(scheme) => {
                write!(f, "unsupported url scheme: {scheme:?}")
            }
            FetchError::MissingHostname(hostname) => match hostname {
                Some(h) => write!(f, "unsupported hostname: {h:?}"),
                None => write!(f, "no hostname in url"),
            },
            FetchError::InvalidNetloc(netloc) => {
                write!(f, "unsupported netloc (no '.'): {netloc:?}")
            }
            FetchError::EmptyStatusLine => {
                write!(f, "empty status line in response")
            }
            FetchError::MalformedLine(line) => {
                write!(f, "malformed response line: {line:?}")
            }
            FetchError::InvalidStatus(token) => {
                write!(f, "status is not an integer: {token:?}")
            }
            FetchError::StatusCode(code) => {
                write!(f, "server reported an error: {code}")
            }
            FetchError::TransferEncoding => {
                write!(f, "transfer encodings are not supported")
            }
            FetchError::ContentEncoding => {
                write!(f, "content encodings are not supported")
            }
            FetchError::Io(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FetchError {
    fn from(err: io::Error) -> Self {
        FetchError::Io(err)
    }
}
