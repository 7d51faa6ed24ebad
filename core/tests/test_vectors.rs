//! Verify the URL and response parsers against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs plus either the expected parsed value
//! or the expected error kind. Expected values are deserialized with serde
//! and compared as whole values.

use std::io::Cursor;

use webget_core::{parse_response, CrlfReader, FetchError, Response, Url};

/// Stable name for an error variant, as used in the vector files.
fn error_kind(err: &FetchError) -> &'static str {
    match err {
        FetchError::UnsupportedScheme(_) => "UnsupportedScheme",
        FetchError::MissingHostname(_) => "MissingHostname",
        FetchError::InvalidNetloc(_) => "InvalidNetloc",
        FetchError::EmptyStatusLine => "EmptyStatusLine",
        FetchError::MalformedLine(_) => "MalformedLine",
        FetchError::InvalidStatus(_) => "InvalidStatus",
        FetchError::StatusCode(_) => "StatusCode",
        FetchError::TransferEncoding => "TransferEncoding",
        FetchError::ContentEncoding => "ContentEncoding",
        FetchError::Io(_) => "Io",
    }
}

#[test]
fn url_test_vectors() {
    let raw = include_str!("../../test-vectors/url.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = case["input"].as_str().unwrap();

        let result = Url::parse(input);
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.expect_err(name);
            assert_eq!(error_kind(&err), expected_error.as_str().unwrap(), "{name}");
        } else {
            let url = result.expect(name);
            let expected: Url = serde_json::from_value(case["expected"].clone()).unwrap();
            assert_eq!(url, expected, "{name}");
        }
    }
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/response.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = case["input"].as_str().unwrap();

        let mut source = CrlfReader::new(Cursor::new(input.as_bytes()));
        let result = parse_response(&mut source);
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.expect_err(name);
            assert_eq!(error_kind(&err), expected_error.as_str().unwrap(), "{name}");
        } else {
            let response = result.expect(name);
            let expected: Response = serde_json::from_value(case["expected"].clone()).unwrap();
            assert_eq!(response, expected, "{name}");
        }
    }
}
