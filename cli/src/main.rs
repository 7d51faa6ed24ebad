//! `webget` — fetch one URL over HTTP/1.0 and print the body.
//!
//! The thin orchestrator around `webget-core`: parse the argv URL, open a
//! TCP connection to the host on port 80, write the request, hand the
//! stream to the response parser, print the body. All parsing and policy
//! lives in the core; this binary is I/O glue.

use std::env;
use std::io::{BufReader, Write};
use std::net::TcpStream;
use std::process::ExitCode;

use webget_core::{parse_response, CrlfReader, FetchError, Response, Url};

const HTTP_PORT: u16 = 80;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (Some(raw_url), None) = (args.next(), args.next()) else {
        eprintln!("usage: webget <url>");
        return ExitCode::FAILURE;
    };

    match fetch(&raw_url) {
        Ok(response) => {
            print!("{}", response.body);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("webget: {err}");
            ExitCode::FAILURE
        }
    }
}

/// One blocking GET round-trip: connect, write the request in full, then
/// parse the reply. The connection closes on every exit path when `stream`
/// drops.
fn fetch(raw_url: &str) -> Result<Response, FetchError> {
    let url = Url::parse(raw_url)?;

    let mut stream = TcpStream::connect((url.hostname.as_str(), HTTP_PORT))?;
    stream.write_all(build_request(&url).as_bytes())?;

    let mut source = CrlfReader::new(BufReader::new(stream));
    parse_response(&mut source)
}

/// The literal wire request. A URL without a path component still needs a
/// request target, so `/` is substituted here, at the transport layer.
fn build_request(url: &Url) -> String {
    let path = if url.path.is_empty() { "/" } else { &url.path };
    format!("GET {path} HTTP/1.0\r\nHost: {}\r\n\r\n", url.hostname)
}
