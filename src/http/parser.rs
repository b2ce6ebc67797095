use std::collections::HashMap;

use crate::http::request::{Method, Request};

/// Locates the `\r\n\r\n` header terminator in a raw buffer.
pub fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Parses an HTTP request out of everything the reader accumulated.
///
/// The buffer is decoded lossily; HTTP heads are ASCII in practice and a
/// garbled byte should not abort the exchange. The request line must split
/// into at least three whitespace tokens (method, path, version) or parsing
/// fails and the caller answers 400. Header lines run up to the first blank
/// line; a line without `:` is silently ignored rather than treated as an
/// error. The body is whatever raw bytes followed the terminator, and is
/// absent when no terminator was found.
pub fn parse_request(buf: &[u8]) -> Option<Request> {
    let (head, body) = match find_header_end(buf) {
        Some(pos) => (
            &buf[..pos],
            Some(String::from_utf8_lossy(&buf[pos + 4..]).into_owned()),
        ),
        // Oversized or truncated head: parse what arrived, no body.
        None => (buf, None),
    };

    let head = String::from_utf8_lossy(head);
    let mut lines = head.split("\r\n");

    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();

    let method = parts.next()?;
    let path = parts.next()?;
    let version = parts.next()?;

    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Some(Request {
        method: Method::from_token(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}
