use super::{KernelsConfig, DEFAULT_CONFIG_FILE};
use crate::error::{common, ErrorCode, ErrorExt, KernelError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves and reads the TOML configuration.
///
/// An explicit path must exist. Otherwise `kernels.toml` in the search
/// directory is used when present, and defaults apply when it is not.
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    search_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            search_dir: PathBuf::from("."),
        }
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    /// Load the file (if any) and apply environment overrides
    pub fn load(&self) -> Result<KernelsConfig> {
        let mut config = self.load_file()?;
        config.merge_env_vars()?;
        Ok(config)
    }

    /// Load the file (if any) without consulting the environment
    pub fn load_file(&self) -> Result<KernelsConfig> {
        match &self.explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(common::config_not_found(path));
                }
                Self::read(path)
            }
            None => {
                let path = self.search_dir.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::read(&path)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(KernelsConfig::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<KernelsConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .to_config_error(format!("cannot read {}", path.display()))?;
        toml::from_str(&content).map_err(|e| {
            KernelError::config_with_code(
                ErrorCode::CONFIG_PARSE_ERROR,
                format!("invalid TOML in {}", path.display()),
            )
            .with_source(e)
        })
    }
}
