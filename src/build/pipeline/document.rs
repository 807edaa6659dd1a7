//! Document types for pipeline processing.

use std::path::{Path, PathBuf};

/// A page being processed through the pipeline.
///
/// 1. Initially: `content` = raw file contents
/// 2. After markdown: `content` = HTML fragment
/// 3. After template: `output_html` = final page HTML
#[derive(Debug)]
pub struct ProcessingDocument {
    /// Source path relative to the content directory
    pub source: PathBuf,

    /// URL the page is served at
    pub url_path: String,

    /// Page title
    pub title: String,

    /// Template override, if the page names one
    pub template: Option<String>,

    /// Content being processed.
    pub content: String,

    /// Final HTML output after template rendering.
    ///
    /// None until the template stage populates it.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    pub fn new(
        source: PathBuf,
        url_path: String,
        title: String,
        template: Option<String>,
        content: String,
    ) -> Self {
        Self {
            source,
            url_path,
            title,
            template,
            content,
            output_html: None,
        }
    }

    /// Get the document's URL path (for output location).
    pub fn url_path(&self) -> &str {
        &self.url_path
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Lowercased source file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}
