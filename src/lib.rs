//! Tinyserve - Minimal Static File Server
//!
//! Core library for HTTP parsing, static file serving, and connection handling.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
