//! HTTP response parsing: status line, headers, body policy gate.
//!
//! # Design
//! Three sequential phases over a `LineSource`, no backtracking, consuming
//! the stream exactly once front to back:
//!
//! 1. Status line — split into version, code, reason. The version token is
//!    never validated (servers may answer a 1.0 request in 1.1). A code
//!    >= 400 fails immediately, before any header is read; anything below,
//!    redirects included, continues.
//! 2. Headers — lines up to the bare CRLF terminator, split at the first
//!    `:`, names case-folded, values trimmed, last duplicate wins. Running
//!    out of stream before the terminator is a framing failure, never
//!    silent completion.
//! 3. Body gate — a `transfer-encoding` header fails first; failing that, a
//!    `content-encoding` header fails. Only then is the remainder of the
//!    stream returned as the body.
//!
//! The parser does not own the underlying connection and never closes it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::stream::LineSource;

/// Lowest status code treated as a server-reported failure.
const MIN_ERROR_STATUS: i32 = 400;

/// The bare CRLF line ending the header section.
const HEADER_TERMINATOR: &str = "\r\n";

/// A fully buffered, accepted HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: i32,
    /// Case-folded header names mapped to trimmed values.
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Parse one response off `source`, returning the buffered body and headers
/// or the first error encountered.
pub fn parse_response<S: LineSource>(source: &mut S) -> Result<Response, FetchError> {
    let status = parse_status_line(source)?;
    let headers = parse_headers(source)?;

    // Fixed priority: a transfer encoding is refused before content
    // encoding is even looked at.
    if headers.contains_key("transfer-encoding") {
        return Err(FetchError::TransferEncoding);
    }
    if headers.contains_key("content-encoding") {
        return Err(FetchError::ContentEncoding);
    }

    let body = source.read_remaining()?;
    Ok(Response {
        status,
        headers,
        body,
    })
}

fn parse_status_line<S: LineSource>(source: &mut S) -> Result<i32, FetchError> {
    let line = source.read_line()?;
    if line.is_empty() {
        return Err(FetchError::EmptyStatusLine);
    }

    let Some((_version, status)) = split_status_fields(&line) else {
        return Err(FetchError::MalformedLine(line));
    };
    let status: i32 = match status.parse() {
        Ok(code) => code,
        Err(_) => return Err(FetchError::InvalidStatus(status.to_string())),
    };
    if status >= MIN_ERROR_STATUS {
        return Err(FetchError::StatusCode(status));
    }
    Ok(status)
}

/// Split `version SP code SP reason` into its first two fields, requiring
/// all three to be present. The reason phrase is read but unused.
fn split_status_fields(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.splitn(3, ' ');
    let version = fields.next()?;
    let status = fields.next()?;
    let _reason = fields.next()?;
    Some((version, status))
}

fn parse_headers<S: LineSource>(source: &mut S) -> Result<HashMap<String, String>, FetchError> {
    let mut headers = HashMap::new();
    loop {
        let line = source.read_line()?;
        if line == HEADER_TERMINATOR {
            return Ok(headers);
        }
        // A colon-less line is malformed; so is hitting end of stream
        // (empty read) before the blank terminator.
        let Some((name, value)) = line.split_once(':') else {
            return Err(FetchError::MalformedLine(line));
        };
        headers.insert(name.to_lowercase(), value.trim().to_string());
    }
}
