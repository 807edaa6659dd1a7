//! Configuration type definitions.
//!
//! These types are pure data - no I/O.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root of an `imgwrap.yaml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings
    pub site: SiteConfig,

    /// Where page templates live
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Markdown rendering options
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Pages to build, in order
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The display name of the site
    pub name: String,

    /// The public URL of the site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Directory page sources are read from, relative to the config file
    #[serde(default = "default_content")]
    pub content: PathBuf,

    /// Output directory, relative to the config file
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_content() -> PathBuf {
    PathBuf::from("content")
}

fn default_output() -> PathBuf {
    PathBuf::from("_site")
}

/// Template directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory holding `*.html` Tera templates, relative to the config file
    #[serde(default = "default_templates_path")]
    pub path: PathBuf,

    /// Template used for pages that don't name one
    #[serde(default = "default_page_template")]
    pub page: String,
}

fn default_templates_path() -> PathBuf {
    PathBuf::from("templates")
}

fn default_page_template() -> String {
    "page.html".to_string()
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            path: default_templates_path(),
            page: default_page_template(),
        }
    }
}

/// A single page to render.
///
/// ```yaml
/// - source: index.md
///   title: Home
///   template: landing.html
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Markdown or HTML source file, relative to `site.content`
    pub source: PathBuf,

    /// Page title (defaults to the title-cased file stem)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Template override for this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Markdown rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// pulldown-cmark extensions to enable
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    ["tables", "strikethrough", "footnotes", "tasklists"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}
