//! Content-Type detection based on file extensions.

use std::path::Path;

/// Returns the Content-Type for a file based on its extension alone.
///
/// File contents are never inspected. Unknown extensions fall back to
/// `application/octet-stream`.
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_extension() {
        assert_eq!(content_type_for(Path::new("index.html")), "text/html");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(
            content_type_for(Path::new("data.blob")),
            "application/octet-stream"
        );
    }
}
