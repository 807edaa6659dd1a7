//! Path and URL conversion utilities.
//!
//! Converts between page source paths (relative to the content directory),
//! the URLs pages are served at, and the files written to the output
//! directory.

use std::path::{Path, PathBuf};

/// Convert a page source path to a URL path.
///
/// # Examples
/// ```ignore
/// source_path_to_url("about.md") => "/about"
/// source_path_to_url("photos/trip.html") => "/photos/trip"
/// source_path_to_url("photos/index.md") => "/photos"
/// source_path_to_url("index.md") => "/"
/// ```
pub fn source_path_to_url(path: &Path) -> String {
    // Remove the extension and convert path separators
    let path_str = path.with_extension("").to_string_lossy().to_string();
    let path_str = path_str.replace('\\', "/");

    // Index files become the directory URL
    let path_str = if path_str == "index" {
        ""
    } else {
        path_str.strip_suffix("/index").unwrap_or(&path_str)
    };

    let trimmed = path_str.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Convert a URL path to an output file path.
///
/// Every page is written as `index.html` inside a directory named after
/// its URL, so `/about` is served from `/about/`.
///
/// # Examples
/// ```ignore
/// url_to_output_path("/photos/trip", output_dir) => output_dir/photos/trip/index.html
/// url_to_output_path("/", output_dir) => output_dir/index.html
/// ```
pub fn url_to_output_path(url_path: &str, output_dir: &Path) -> PathBuf {
    let url_path = url_path.trim_start_matches('/');

    if url_path.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(url_path).join("index.html")
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
