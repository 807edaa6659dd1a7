use std::path::{Path, PathBuf};

use crate::config::{Config, PageConfig};
use crate::util::title_case;

use super::paths::source_path_to_url;
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingDocument};
use super::render::{RenderError, Renderer, SiteContext};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("page source not found: {0}")]
    MissingSource(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    pub pages: usize,
}

pub struct Builder {
    config: Config,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
}

impl Builder {
    pub fn new(config: Config, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        // 1. Load page sources
        // 2. Load renderer (templates + filters)
        // 3. Run the pipeline: markdown -> template -> write

        let mut docs = Vec::with_capacity(self.config.pages.len());
        for page in &self.config.pages {
            docs.push(self.load_page(page).await?);
        }
        println!("Found {} page(s)", docs.len());

        let templates_path = self.resolve(&self.config.templates.path);
        let renderer = Renderer::new(&templates_path)?;

        let output_dir = self.output_dir();
        tokio::fs::create_dir_all(&output_dir).await?;

        let site_context = SiteContext {
            name: self.config.site.name.clone(),
            url: self.config.site.url.clone(),
        };

        let mut ctx = PipelineContext::new(
            &output_dir,
            &site_context,
            &self.config.markdown,
            &renderer,
            &self.config.templates.page,
        );
        Pipeline::default_pipeline().run(&mut docs, &mut ctx)?;

        let display_output = output_dir.canonicalize().unwrap_or(output_dir.clone());
        println!("Wrote {} page(s) to {}", docs.len(), display_output.display());

        Ok(BuildResult {
            output_dir,
            pages: docs.len(),
        })
    }

    async fn load_page(&self, page: &PageConfig) -> Result<ProcessingDocument, BuildError> {
        let path = self.content_dir().join(&page.source);
        if !path.is_file() {
            return Err(BuildError::MissingSource(path));
        }

        let content = tokio::fs::read_to_string(&path).await?;
        let url_path = source_path_to_url(&page.source);
        let title = page
            .title
            .clone()
            .unwrap_or_else(|| self.default_title(&page.source));
        log::debug!("loaded {} as {}", path.display(), url_path);

        Ok(ProcessingDocument::new(
            page.source.clone(),
            url_path,
            title,
            page.template.clone(),
            content,
        ))
    }

    /// Title from the file stem; index pages use their directory name,
    /// and the root index uses the site name.
    fn default_title(&self, source: &Path) -> String {
        let stem = source.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if stem != "index" {
            return title_case(stem);
        }

        source
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(title_case)
            .unwrap_or_else(|| self.config.site.name.clone())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    fn content_dir(&self) -> PathBuf {
        self.resolve(&self.config.site.content)
    }

    fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.site.output)
    }
}
