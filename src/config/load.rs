//! Configuration loading from files.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

impl Config {
    /// Resolve the `--config-file` argument to an absolute path,
    /// defaulting to `imgwrap.yaml` in the working directory.
    pub fn resolve_path(config_file: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let config_file = config_file.unwrap_or(Path::new("imgwrap.yaml"));
        if config_file.is_relative() {
            Ok(std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file))
        } else {
            Ok(config_file.to_path_buf())
        }
    }

    /// Load the config from a file path
    pub async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("loading config from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a config from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
