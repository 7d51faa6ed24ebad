//! Minimal HTTP/1.0 client core.
//!
//! # Overview
//! Validates URLs and parses HTTP responses without touching the network
//! (host-does-IO pattern). The caller opens the TCP connection, writes the
//! request, and hands the readable side of the stream to `parse_response`;
//! the core stays deterministic and testable against in-memory buffers.
//!
//! # Design
//! - `Url::parse` is a pure function; a `Url` value is valid by construction.
//! - `parse_response` consumes a `LineSource` exactly once, front to back,
//!   and never owns or closes the underlying connection.
//! - Unsupported response shapes — transfer or content encodings, error
//!   statuses — are refused with a dedicated `FetchError` variant instead
//!   of being partially handled. No retries, no recovery.

pub mod error;
pub mod response;
pub mod stream;
pub mod url;

pub use error::FetchError;
pub use response::{parse_response, Response};
pub use stream::{CrlfReader, LineSource};
pub use url::Url;
