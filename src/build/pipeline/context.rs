//! Pipeline context for sharing state across stages.

use std::path::Path;

use crate::build::render::{Renderer, SiteContext};
use crate::config::MarkdownConfig;

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    /// Directory where output files are written
    pub output_dir: &'a Path,

    /// Site metadata (name, URL)
    pub site: &'a SiteContext,

    /// Markdown processing configuration
    pub markdown_config: &'a MarkdownConfig,

    /// Template renderer, with filters registered
    pub renderer: &'a Renderer,

    /// Template for pages without an override
    pub default_template: &'a str,
}

impl<'a> PipelineContext<'a> {
    pub fn new(
        output_dir: &'a Path,
        site: &'a SiteContext,
        markdown_config: &'a MarkdownConfig,
        renderer: &'a Renderer,
        default_template: &'a str,
    ) -> Self {
        Self {
            output_dir,
            site,
            markdown_config,
            renderer,
            default_template,
        }
    }
}
