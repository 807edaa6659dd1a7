//! Page template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::render::{PageContext, PageInfo};

/// Stage that applies the page template to rendered content.
///
/// Templates receive `site`, `page` and `content`; it is up to the
/// template to pipe `content` through `wrap_images`.
///
/// After this stage, `doc.output_html` contains the complete HTML page.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let page_context = PageContext {
                site: ctx.site.clone(),
                page: PageInfo {
                    title: doc.title.clone(),
                    url: doc.url_path.clone(),
                },
                content: doc.content.clone(),
            };

            let template = doc.template.as_deref().unwrap_or(ctx.default_template);
            let html = ctx.renderer.render_page(template, &page_context)?;

            doc.output_html = Some(html);
        }

        Ok(())
    }
}
