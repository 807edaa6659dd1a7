use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use crate::filters::register_filters;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("templates directory not found: {0}")]
    TemplatesNotFound(String),

    #[error("template '{0}' not found")]
    MissingTemplate(String),
}

/// The template renderer, wrapping Tera.
///
/// Every constructor registers the crate's filters exactly once, so
/// templates can use `{{ content | wrap_images | safe }}`.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a new renderer loading `**/*.html` templates from the given directory.
    pub fn new(templates_path: &Path) -> Result<Self, RenderError> {
        if !templates_path.is_dir() {
            return Err(RenderError::TemplatesNotFound(
                templates_path.display().to_string(),
            ));
        }

        let glob = templates_path.join("**/*.html");
        let glob_str = glob.to_string_lossy();
        let tera = Tera::new(&glob_str)?;
        log::debug!(
            "loaded {} template(s) from {}",
            tera.get_template_names().count(),
            templates_path.display()
        );

        Ok(Self::with_tera(tera))
    }

    /// Wrap an already-configured Tera instance.
    pub fn with_tera(mut tera: Tera) -> Self {
        register_filters(&mut tera);
        Self { tera }
    }

    /// Whether a template with this name was loaded.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a page with the given context.
    pub fn render_page(&self, template: &str, context: &PageContext) -> Result<String, RenderError> {
        if !self.has_template(template) {
            return Err(RenderError::MissingTemplate(template.to_string()));
        }

        Ok(self.tera.render(template, &context.to_tera())?)
    }

    /// Render a one-off template string with the given context.
    ///
    /// Filters are available, but templates loaded from disk can't be
    /// extended from here. Output is not autoescaped.
    #[allow(dead_code)]
    pub fn render_str(&mut self, source: &str, context: &PageContext) -> Result<String, RenderError> {
        Ok(self.tera.render_str(source, &context.to_tera())?)
    }
}

/// Context passed to page templates.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub site: SiteContext,
    pub page: PageInfo,
    /// Rendered HTML body of the page, not yet filtered
    pub content: String,
}

impl PageContext {
    fn to_tera(&self) -> Context {
        let mut tera_context = Context::new();
        tera_context.insert("site", &self.site);
        tera_context.insert("page", &self.page);
        tera_context.insert("content", &self.content);
        tera_context
    }
}

/// Site-level information.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub name: String,
    pub url: Option<String>,
}

/// Information about the current page.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(content: &str) -> PageContext {
        PageContext {
            site: SiteContext {
                name: "Gallery".to_string(),
                url: None,
            },
            page: PageInfo {
                title: "Trip".to_string(),
                url: "/trip".to_string(),
            },
            content: content.to_string(),
        }
    }

    fn renderer_with(name: &str, source: &str) -> Renderer {
        let mut tera = Tera::default();
        tera.add_raw_template(name, source).unwrap();
        Renderer::with_tera(tera)
    }

    #[test]
    fn test_render_page_applies_filter() {
        let renderer = renderer_with(
            "page.html",
            "<h1>{{ page.title }}</h1>{{ content | wrap_images | safe }}",
        );

        let html = renderer
            .render_page("page.html", &context(r#"<p>Hi</p><img src="a.png">"#))
            .unwrap();

        assert_eq!(
            html,
            r#"<h1>Trip</h1><p>Hi</p><p align="middle"><img src="a.png"></p>"#
        );
    }

    #[test]
    fn test_render_page_without_safe_is_escaped() {
        let renderer = renderer_with("page.html", "{{ content | wrap_images }}");

        let html = renderer
            .render_page("page.html", &context("<img>"))
            .unwrap();

        assert!(html.starts_with("&lt;p align="));
    }

    #[test]
    fn test_render_page_missing_template() {
        let renderer = renderer_with("page.html", "{{ content }}");

        let result = renderer.render_page("other.html", &context(""));
        assert!(matches!(result, Err(RenderError::MissingTemplate(name)) if name == "other.html"));
    }

    #[test]
    fn test_render_page_filter_on_non_string_fails() {
        let renderer = renderer_with("page.html", "{{ site | wrap_images }}");

        let result = renderer.render_page("page.html", &context(""));
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn test_render_str_uses_filters() {
        let mut renderer = Renderer::with_tera(Tera::default());

        let html = renderer
            .render_str("{{ content | wrap_images }}", &context("<img src=x>"))
            .unwrap();

        assert_eq!(html, r#"<p align="middle"><img src=x></p>"#);
    }

    #[test]
    fn test_new_missing_directory() {
        let result = Renderer::new(Path::new("/definitely/not/a/templates/dir"));
        assert!(matches!(result, Err(RenderError::TemplatesNotFound(_))));
    }

    #[test]
    fn test_new_loads_templates_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("page.html"),
            "{{ content | wrap_images | safe }}",
        )
        .unwrap();

        let renderer = Renderer::new(dir.path()).unwrap();
        assert!(renderer.has_template("page.html"));

        let html = renderer
            .render_page("page.html", &context("<img src=a.png>"))
            .unwrap();
        assert_eq!(html, r#"<p align="middle"><img src=a.png></p>"#);
    }
}
