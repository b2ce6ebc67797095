use std::time::SystemTime;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";
const SERVER_NAME: &str = "tinyserve/0.1";

/// Appends the default headers for any key the caller did not supply.
///
/// Order of the appended defaults mirrors their fixed order here; caller
/// headers keep their original positions. `Connection: close` is always
/// injected when absent because the server never keeps connections alive,
/// and `Content-Length` always ends up equal to the exact body length.
pub fn apply_default_headers(headers: &mut Vec<(String, String)>, body_len: usize) {
    let defaults = [
        ("Server", SERVER_NAME.to_string()),
        ("Date", httpdate::fmt_http_date(SystemTime::now())),
        ("Connection", "close".to_string()),
        ("Content-Length", body_len.to_string()),
    ];

    for (key, value) in defaults {
        if !headers.iter().any(|(k, _)| k == key) {
            headers.push((key.to_string(), value));
        }
    }
}

/// Serializes a response into a single byte sequence ready for one write.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut headers = resp.headers.clone();
    apply_default_headers(&mut headers, resp.body.len());

    let mut buf = Vec::with_capacity(resp.body.len() + 256);

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    for (k, v) in &headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(&resp.body);

    buf
}

/// Owns a fully serialized response and writes it to the client exactly once.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
