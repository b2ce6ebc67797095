use tracing::error;

use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// Handles POST requests. Only `/echo` is recognized; any other POST path
/// is answered with 500 Internal Server Error.
///
/// Headers and body are reflected verbatim, without HTML-escaping. That is
/// a known injection-risk limitation of the echo page, kept as-is.
pub fn handle_post(req: &Request) -> Response {
    if req.path != "/echo" {
        error!("No POST handler for {}", req.path);
        return Response::internal_error();
    }

    let headers = req
        .headers
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("\n");
    let body = req.body.as_deref().unwrap_or("");

    let page = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>POST Echo</title></head>\n\
         <body>\n\
         <h1>POST Data Received</h1>\n\
         <h2>Headers:</h2>\n\
         <pre>{headers}</pre>\n\
         <h2>Body:</h2>\n\
         <pre>{body}</pre>\n\
         <a href=\"/\">Back to Home</a>\n\
         </body>\n\
         </html>\n"
    );

    Response::html(StatusCode::Ok, page)
}
