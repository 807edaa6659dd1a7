//! Content rendering stage.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that turns page sources into HTML fragments.
///
/// Markdown sources (`.md`, `.markdown`) are rendered with pulldown-cmark.
/// HTML sources (`.html`, `.htm`) are already fragments and pass through.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            match doc.extension().as_deref() {
                Some("md" | "markdown") => {
                    doc.content = render_markdown(&doc.content, ctx.markdown_config).map_err(|e| {
                        PipelineError::stage(
                            "markdown",
                            format!("failed to render {}: {}", doc.url_path(), e),
                        )
                    })?;
                }
                Some("html" | "htm") => {}
                other => {
                    return Err(PipelineError::stage(
                        "markdown",
                        format!(
                            "unsupported source extension for {}: {}",
                            doc.source().display(),
                            other.unwrap_or("(none)")
                        ),
                    ));
                }
            }
            log::debug!("rendered content for {}", doc.url_path());
        }

        Ok(())
    }
}
