//! Request handlers.
//!
//! Maps a parsed request onto a response. Every error a handler can hit is
//! recovered locally into an HTTP response; nothing below this layer
//! produces a transport error.

pub mod echo;
pub mod resolve;
pub mod static_files;

use std::path::Path;

use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// Routes a request by method. GET serves files, POST echoes, anything
/// else is 405 Method Not Allowed.
pub async fn dispatch(req: &Request, docroot: &Path) -> Response {
    match &req.method {
        Method::Get => static_files::handle_get(docroot, &req.path).await,
        Method::Post => echo::handle_post(req),
        Method::Other(_) => Response::method_not_allowed(),
    }
}
