use crate::audit::{FieldSpec, DEFAULT_IDENTIFIER_COLUMN, DEFAULT_LINK_COLUMN};
use crate::error::AuditError;
use crate::report::DEFAULT_LIST_LIMIT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_identifier_column")]
    pub identifier_column: String,
    #[serde(default = "default_link_column")]
    pub link_column: String,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_identifier_column() -> String {
    DEFAULT_IDENTIFIER_COLUMN.to_string()
}

fn default_link_column() -> String {
    DEFAULT_LINK_COLUMN.to_string()
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identifier_column: default_identifier_column(),
            link_column: default_link_column(),
            list_limit: default_list_limit(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "catalog-audit", "catalog-audit")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Config from the platform config directory. Falls back to defaults when
    /// the file is absent or broken.
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                match Self::from_path(&config_path) {
                    Ok(config) => {
                        debug!(path = %config_path.display(), "loaded config");
                        return config;
                    }
                    Err(e) => warn!("ignoring config: {}", e),
                }
            }
        }
        Config::default()
    }

    pub fn from_path(path: &Path) -> Result<Self, AuditError> {
        let content = fs::read_to_string(path).map_err(|e| AuditError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| AuditError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let config_path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("no config directory available on this platform"))?;
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn field_spec(&self) -> FieldSpec {
        FieldSpec::new(&self.identifier_column, &self.link_column)
    }
}
