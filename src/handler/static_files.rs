use std::io;
use std::path::Path;

use tokio::fs;
use tracing::error;

use crate::handler::resolve::{self, ResolveError};
use crate::http::mime;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Serves a GET request for the given raw URL path.
///
/// Containment is checked first; only a contained path ever touches the
/// filesystem. Unexpected filesystem errors are logged and collapsed into a
/// generic 500 so nothing internal leaks to the client.
pub async fn handle_get(docroot: &Path, url_path: &str) -> Response {
    let resolved = match resolve::resolve(docroot, url_path) {
        Ok(path) => path,
        Err(ResolveError::OutsideRoot) => return Response::forbidden(),
    };

    match serve(&resolved, url_path).await {
        Ok(response) => response,
        Err(e) => {
            error!("Error serving {}: {}", resolved.display(), e);
            Response::internal_error()
        }
    }
}

async fn serve(resolved: &Path, url_path: &str) -> io::Result<Response> {
    let meta = match fs::metadata(resolved).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(Response::not_found());
        }
        Err(e) => return Err(e),
    };

    if meta.is_dir() {
        return list_directory(resolved, url_path).await;
    }

    let content = fs::read(resolved).await?;
    let content_type = mime::content_type_for(resolved);

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", content_type)
        .body(content)
        .build())
}

/// Renders a directory listing page.
///
/// Entries are sorted lexicographically and linked relative to the original
/// URL path, never the filesystem path. Directories get a trailing slash
/// and a bold style. A `..` link leads to the parent unless the listing is
/// for the root itself.
async fn list_directory(dir: &Path, url_path: &str) -> io::Result<Response> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await?.is_dir();
        entries.push((name, is_dir));
    }
    entries.sort();

    let base = url_path.trim_end_matches('/');

    let mut html = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>Directory listing for {url_path}</title>\n\
         <style>\n\
         body {{ font-family: Arial; margin: 40px; }}\n\
         .file {{ margin: 5px 0; }}\n\
         .dir {{ font-weight: bold; color: #0066cc; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Directory listing for {url_path}</h1>\n\
         <hr>\n"
    );

    if url_path != "/" {
        let parent = match base.rfind('/') {
            Some(0) | None => "/",
            Some(i) => &base[..i],
        };
        html.push_str(&format!(
            "<div class=\"file\"><a href=\"{parent}\">..</a></div>\n"
        ));
    }

    for (name, is_dir) in &entries {
        if *is_dir {
            html.push_str(&format!(
                "<div class=\"file dir\"><a href=\"{base}/{name}/\">{name}/</a></div>\n"
            ));
        } else {
            html.push_str(&format!(
                "<div class=\"file\"><a href=\"{base}/{name}\">{name}</a></div>\n"
            ));
        }
    }

    html.push_str("<hr>\n</body>\n</html>\n");

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(html.into_bytes())
        .build())
}
