//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server core. Every connection
//! carries exactly one request and one response; there is no keep-alive.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses an HTTP request head and body out of a raw byte buffer
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content-Type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Drain bytes until the header terminator
//!        └──────┬──────┘
//!               │
//!       ┌───────┴────────┐
//!       ▼                ▼
//! ┌───────────┐   ┌─────────────┐
//! │  Parsed   │   │ ParseFailed │ → 400 Bad Request
//! └─────┬─────┘   └──────┬──────┘
//!       │ dispatched     │
//!       ▼                ▼
//!        ┌──────────────────┐
//!        │    Responding    │ ← One write of one response
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │      Closed      │
//!        └──────────────────┘
//! ```
//!
//! A peer that closes without sending any bytes skips straight to `Closed`
//! with nothing written.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
