use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The candidate path escapes the document root.
    OutsideRoot,
}

/// Maps a raw URL path onto a filesystem path under the document root.
///
/// `/` is substituted with `/index.html`. The path is percent-decoded and
/// joined onto the root with textual normalization of `.` and `..`
/// segments; a `..` that would climb above the root, or a decoded path that
/// is itself absolute, is rejected before any filesystem access. The
/// document root must already be in canonical form so the final prefix
/// check is meaningful.
pub fn resolve(docroot: &Path, url_path: &str) -> Result<PathBuf, ResolveError> {
    let path = if url_path == "/" { "/index.html" } else { url_path };
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let decoded = percent_decode_str(trimmed).decode_utf8_lossy();

    let mut resolved = docroot.to_path_buf();
    let mut depth = 0usize;

    for component in Path::new(decoded.as_ref()).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(ResolveError::OutsideRoot);
                }
                resolved.pop();
                depth -= 1;
            }
            // A decoded absolute path would replace the root on join.
            Component::RootDir | Component::Prefix(_) => {
                return Err(ResolveError::OutsideRoot);
            }
        }
    }

    // Containment invariant: normalization above can only descend.
    if !resolved.starts_with(docroot) {
        return Err(ResolveError::OutsideRoot);
    }

    Ok(resolved)
}
