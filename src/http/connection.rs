use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::info;

use crate::handler;
use crate::http::parser::{find_header_end, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Read chunk size for draining the request off the socket.
const READ_CHUNK: usize = 4096;

/// Soft cap on the accumulated request head. Reading stops here but the
/// bytes gathered so far are still parsed and answered.
const MAX_HEAD_BYTES: usize = 8192;

/// Per-connection state: the socket, the peer that opened it, and the read
/// buffer. Owned exclusively by one task and dropped (closing the socket)
/// when that task finishes, whichever state it exits from.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    docroot: PathBuf,
    buffer: Vec<u8>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsed(Request),
    ParseFailed,
    Responding(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, docroot: PathBuf) -> Self {
        Self {
            stream,
            peer,
            docroot,
            buffer: Vec::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request/response exchange.
    ///
    /// Errors returned here are transport failures (broken pipe, reset);
    /// everything handler-level has already been folded into a response by
    /// the time we get to writing. Exactly one response is written per
    /// handled request, then the connection closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    if !self.fill_buffer().await? {
                        // Peer closed without sending anything: no response.
                        self.state = ConnectionState::Closed;
                        continue;
                    }

                    self.state = match parse_request(&self.buffer) {
                        Some(req) => ConnectionState::Parsed(req),
                        None => ConnectionState::ParseFailed,
                    };
                }

                ConnectionState::Parsed(req) => {
                    info!("{} - {} {}", self.peer, req.method.as_str(), req.path);

                    let response = handler::dispatch(&req, &self.docroot).await;
                    self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                }

                ConnectionState::ParseFailed => {
                    info!("{} - unparsable request", self.peer);

                    let response = Response::bad_request();
                    self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                }

                ConnectionState::Responding(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates request bytes until the header terminator arrives, the
    /// peer closes, or the head cap is exceeded.
    ///
    /// Returns `false` when nothing at all was read. Body bytes past the
    /// terminator are captured only if they arrived in the same chunks;
    /// there is no Content-Length-driven continued read.
    async fn fill_buffer(&mut self) -> anyhow::Result<bool> {
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            let n = self.stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }

            self.buffer.extend_from_slice(&chunk[..n]);

            if find_header_end(&self.buffer).is_some() {
                break;
            }
            if self.buffer.len() > MAX_HEAD_BYTES {
                break;
            }
        }

        Ok(!self.buffer.is_empty())
    }
}
