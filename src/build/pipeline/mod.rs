//! Build pipeline for page processing.
//!
//! The pipeline transforms pages through a series of stages:
//! 1. Markdown rendering (to an HTML fragment)
//! 2. Template rendering (page template, filters applied here)
//! 3. File writing (output to disk)
//!
//! Custom stages can be inserted before or after any named stage.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{MarkdownStage, TemplateStage, WriteStage};

/// A stage in the page processing pipeline.
///
/// Stages transform documents sequentially. Each stage receives all documents
/// and can modify them in place before passing to the next stage.
pub trait Stage: Send + Sync {
    /// Unique name for this stage (used for insertion points).
    fn name(&self) -> &'static str;

    /// Process documents through this stage.
    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The page processing pipeline.
///
/// The default pipeline is: markdown → template → write.
///
/// ```ignore
/// pipeline.insert_after("markdown", MyCustomStage);
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(TemplateStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Insert a stage before the named stage.
    ///
    /// # Panics
    ///
    /// Panics if no stage with the given name exists.
    #[allow(dead_code)]
    pub fn insert_before<S: Stage + 'static>(&mut self, name: &str, stage: S) -> &mut Self {
        let pos = self.position(name);
        self.stages.insert(pos, Box::new(stage));
        self
    }

    /// Insert a stage after the named stage.
    ///
    /// # Panics
    ///
    /// Panics if no stage with the given name exists.
    #[allow(dead_code)]
    pub fn insert_after<S: Stage + 'static>(&mut self, name: &str, stage: S) -> &mut Self {
        let pos = self.position(name);
        self.stages.insert(pos + 1, Box::new(stage));
        self
    }

    fn position(&self, name: &str) -> usize {
        self.stages
            .iter()
            .position(|s| s.name() == name)
            .unwrap_or_else(|| panic!("stage '{}' not found in pipeline", name))
    }

    /// Run the pipeline on a set of documents.
    pub fn run(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            log::debug!("running stage '{}' on {} document(s)", stage.name(), docs.len());
            stage.process(docs, ctx)?;
        }

        Ok(())
    }

    /// Get the names of all stages in order.
    #[allow(dead_code)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
