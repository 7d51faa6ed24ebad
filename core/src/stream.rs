//! Line-oriented source abstraction over the response stream.
//!
//! # Design
//! The response parser only needs two capabilities: "read one line including
//! its terminator" and "read everything that is left." `LineSource` captures
//! exactly that, so the parser can run against an in-memory `Cursor` in tests
//! and a `BufReader<TcpStream>` in the real client without changing.
//!
//! `CrlfReader` treats CRLF as the only line terminator, matching HTTP wire
//! framing — a bare `\n` inside a line does not end it, and no LF-only
//! normalization is performed.

use std::io::{self, BufRead};

/// A blocking, line-oriented text source.
pub trait LineSource {
    /// Read the next line, including its CRLF terminator. Returns an empty
    /// string at end of stream. A final line without a terminator is
    /// returned as-is.
    fn read_line(&mut self) -> io::Result<String>;

    /// Read the remainder of the stream as text.
    fn read_remaining(&mut self) -> io::Result<String>;
}

/// `LineSource` over any buffered reader, splitting lines at CRLF only.
#[derive(Debug)]
pub struct CrlfReader<R> {
    inner: R,
}

impl<R: BufRead> CrlfReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for CrlfReader<R> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        loop {
            let n = self.inner.read_until(b'\n', &mut buf)?;
            // A bare `\n` is not a terminator in CRLF framing; keep going.
            if n == 0 || buf.ends_with(b"\r\n") {
                return into_utf8(buf);
            }
        }
    }

    fn read_remaining(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.inner.read_to_end(&mut buf)?;
        into_utf8(buf)
    }
}

fn into_utf8(buf: Vec<u8>) -> io::Result<String> {
    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
