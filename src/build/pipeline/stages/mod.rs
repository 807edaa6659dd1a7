//! Default pipeline stages.
//!
//! 1. **MarkdownStage** - Convert markdown sources to HTML
//! 2. **TemplateStage** - Render the page template (where `wrap_images` runs)
//! 3. **WriteStage** - Write final HTML to output directory

mod markdown;
mod template;
mod write;

pub use markdown::MarkdownStage;
pub use template::TemplateStage;
pub use write::WriteStage;
