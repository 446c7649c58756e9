use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Static asset service with the single-page-application fallback rule: a
/// path naming an existing file under the build directory is served as-is,
/// anything else yields `index.html` so the frontend router can interpret
/// the URL after load.
pub fn service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
