//! Configuration loading and types for imgwrap.
//!
//! - Type definitions for config structures (`types`)
//! - Loading configs from files (`load`)

mod load;
mod types;

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::build::source_path_to_url;

pub use types::{Config, MarkdownConfig, PageConfig, SiteConfig, TemplatesConfig};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("{0}")]
    Validation(String),
}

impl Config {
    /// Check constraints serde can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "invalid config: 'site.name' must not be empty".to_string(),
            ));
        }

        self.validate_output()?;

        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.source.is_absolute()
                || page
                    .source
                    .components()
                    .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
            {
                return Err(ConfigError::Validation(format!(
                    "invalid config: page source '{}' must be a relative path inside 'site.content'",
                    page.source.display()
                )));
            }

            let url = source_path_to_url(&page.source);
            if !seen.insert(url.clone()) {
                return Err(ConfigError::Validation(format!(
                    "invalid config: more than one page maps to URL '{url}' (last: {})",
                    page.source.display()
                )));
            }
        }

        Ok(())
    }

    /// `site.output` is deleted by `clean` and overwritten by `build`, so it
    /// must not be the project directory or overlap the content or templates.
    fn validate_output(&self) -> Result<(), ConfigError> {
        let output = normalize(&self.site.output);
        if output.as_os_str().is_empty()
            || output.components().all(|c| c == Component::ParentDir)
        {
            return Err(ConfigError::Validation(format!(
                "invalid config: 'site.output' ({}) must be a subdirectory, not the project directory or one of its parents",
                self.site.output.display()
            )));
        }

        for (key, dir) in [
            ("site.content", &self.site.content),
            ("templates.path", &self.templates.path),
        ] {
            let dir = normalize(dir);
            if dir.starts_with(&output) || output.starts_with(&dir) {
                return Err(ConfigError::Validation(format!(
                    "invalid config: 'site.output' ({}) overlaps '{key}' ({})",
                    self.site.output.display(),
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}

/// Lexically normalize a path: drop `.` and fold `dir/..` pairs.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}
