//! URL parsing and validation for the single supported scheme.
//!
//! # Design
//! `Url::parse` decomposes `scheme://authority/path[?query][#fragment]` and
//! applies three checks in order: the scheme must be `http`, a hostname must
//! be present, and the authority must contain a `.`. A constructed `Url` is
//! therefore always valid; there is no partially-valid state.
//!
//! The dot check is a crude domain-shape heuristic, kept deliberately: it
//! rejects bare single-label hosts such as `http://localhost`.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

const SUPPORTED_SCHEME: &str = "http";

/// An immutable, validated URL.
///
/// `path` keeps the query string and drops any fragment; an empty path is
/// left empty — substituting `/` is the transport's business, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub scheme: String,
    pub hostname: String,
    pub netloc: String,
    pub path: String,
}

impl Url {
    /// Parse and validate `raw`. Pure function of its input.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let (scheme, rest) = split_scheme(raw);
        if scheme != SUPPORTED_SCHEME {
            return Err(FetchError::UnsupportedScheme(scheme));
        }

        let (netloc, rest) = split_netloc(rest);
        let Some(hostname) = extract_hostname(netloc) else {
            return Err(FetchError::MissingHostname(None));
        };
        if !netloc.contains('.') {
            return Err(FetchError::InvalidNetloc(netloc.to_string()));
        }

        let path = rest.split_once('#').map_or(rest, |(path, _fragment)| path);

        Ok(Url {
            scheme: SUPPORTED_SCHEME.to_string(),
            hostname: hostname.to_string(),
            netloc: netloc.to_string(),
            path: path.to_string(),
        })
    }
}

/// Split off the scheme, lowercased. Input without a scheme-shaped prefix
/// (e.g. a bare relative path) yields an empty scheme.
fn split_scheme(raw: &str) -> (String, &str) {
    match raw.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => (scheme.to_ascii_lowercase(), rest),
        _ => (String::new(), raw),
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split the authority from what follows the scheme. Without a leading `//`
/// there is no authority and the whole remainder is the path.
fn split_netloc(rest: &str) -> (&str, &str) {
    let Some(rest) = rest.strip_prefix("//") else {
        return ("", rest);
    };
    match rest.find(['/', '?', '#']) {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    }
}

/// Pull the hostname out of the authority: drop userinfo, then the port.
/// A bracketed IPv6 literal keeps everything between the brackets. Case is
/// preserved as given.
fn extract_hostname(netloc: &str) -> Option<&str> {
    let host_port = netloc.rsplit_once('@').map_or(netloc, |(_userinfo, h)| h);
    let host = if let Some(bracketed) = host_port.strip_prefix('[') {
        bracketed.split_once(']').map(|(host, _)| host)?
    } else {
        host_port.split_once(':').map_or(host_port, |(host, _port)| host)
    };
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
