use std::collections::HashMap;

use tinyserve::http::response::{Response, ResponseBuilder, StatusCode};
use tinyserve::http::writer::{apply_default_headers, serialize_response};

/// Splits serialized response bytes back into (status line, headers, body).
fn reparse(bytes: &[u8]) -> (String, HashMap<String, String>, Vec<u8>) {
    let pos = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("serialized response has a header terminator");
    let head = std::str::from_utf8(&bytes[..pos]).unwrap();
    let body = bytes[pos + 4..].to_vec();

    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap().to_string();
    let headers = lines
        .map(|line| {
            let (k, v) = line.split_once(": ").unwrap();
            (k.to_string(), v.to_string())
        })
        .collect();

    (status_line, headers, body)
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_builder_sets_exact_content_length() {
    let resp = ResponseBuilder::new(StatusCode::Ok)
        .body(b"hello".to_vec())
        .build();

    assert_eq!(resp.header("Content-Length"), Some("5"));
}

#[test]
fn test_builder_preserves_header_order() {
    let resp = ResponseBuilder::new(StatusCode::Ok)
        .header("X-First", "1")
        .header("X-Second", "2")
        .header("X-Third", "3")
        .build();

    let names: Vec<&str> = resp.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        names,
        vec!["X-First", "X-Second", "X-Third", "Content-Length"]
    );
}

#[test]
fn test_defaults_do_not_override_supplied_headers() {
    let mut headers = vec![("Server".to_string(), "custom/9".to_string())];
    apply_default_headers(&mut headers, 0);

    let servers: Vec<&str> = headers
        .iter()
        .filter(|(k, _)| k == "Server")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(servers, vec!["custom/9"]);
}

#[test]
fn test_defaults_fill_all_missing_keys() {
    let mut headers = Vec::new();
    apply_default_headers(&mut headers, 11);

    let map: HashMap<&str, &str> = headers
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert!(map.contains_key("Server"));
    assert!(map.contains_key("Date"));
    assert_eq!(map["Connection"], "close");
    assert_eq!(map["Content-Length"], "11");
    // RFC 1123 dates always end in GMT.
    assert!(map["Date"].ends_with("GMT"));
}

#[test]
fn test_serialized_response_round_trips() {
    let resp = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(b"round trip".to_vec())
        .build();

    let (status_line, headers, body) = reparse(&serialize_response(&resp));

    assert_eq!(status_line, "HTTP/1.1 200 OK");
    assert_eq!(headers["Content-Type"], "text/plain");
    assert_eq!(headers["Content-Length"], "10");
    assert_eq!(headers["Connection"], "close");
    assert!(headers.contains_key("Server"));
    assert!(headers.contains_key("Date"));
    assert_eq!(body, b"round trip");
}

#[test]
fn test_serialized_error_response() {
    let (status_line, headers, body) = reparse(&serialize_response(&Response::not_found()));

    assert_eq!(status_line, "HTTP/1.1 404 Not Found");
    assert_eq!(headers["Content-Type"], "text/html");
    assert!(String::from_utf8(body).unwrap().contains("404 Not Found"));
}

#[test]
fn test_empty_body_has_zero_content_length() {
    let resp = ResponseBuilder::new(StatusCode::Ok).build();
    let (_, headers, body) = reparse(&serialize_response(&resp));

    assert_eq!(headers["Content-Length"], "0");
    assert!(body.is_empty());
}
