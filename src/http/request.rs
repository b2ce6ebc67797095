use std::collections::HashMap;

/// HTTP request methods.
///
/// The server handles GET and POST; any other token is preserved so the
/// dispatcher can answer 405 Method Not Allowed instead of rejecting the
/// request at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Submit data
    Post,
    /// Any other method token, kept verbatim
    Other(String),
}

impl Method {
    /// Classifies a method token. Never fails: unknown tokens become
    /// [`Method::Other`].
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Other(s) => s.as_str(),
        }
    }
}

/// Represents a parsed HTTP request from a client.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, or anything else)
    pub method: Method,
    /// The raw request path, still percent-encoded (e.g. "/index.html")
    pub path: String,
    /// HTTP version as sent; informational only, never validated
    pub version: String,
    /// Request headers; for duplicate names, the last occurrence wins
    pub headers: HashMap<String, String>,
    /// Body text, present only when the header terminator was found.
    /// Only bytes that arrived together with the head are captured.
    pub body: Option<String>,
}

impl Request {
    /// Retrieves a header value by its exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
