//! Configuration structures for receipt validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::brands::BrandDirectory;
use crate::dates::DEFAULT_INPUT_FORMAT;
use crate::error::Result;

/// Main configuration for rcpt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RcptConfig {
    /// Validation configuration.
    pub validation: ValidationConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Client used when a submission does not name one.
    pub default_client: String,

    /// chrono format of claimed receipt dates.
    pub date_input_format: String,

    /// JSON brand catalog replacing the built-in one.
    pub brand_catalog: Option<PathBuf>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_client: "Luxottica".to_string(),
            date_input_format: DEFAULT_INPUT_FORMAT.to_string(),
            brand_catalog: None,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Keep block geometry in verdicts.
    pub include_geometry: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            include_geometry: true,
        }
    }
}

impl RcptConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Brand catalog selected by this configuration.
    pub fn brand_directory(&self) -> Result<BrandDirectory> {
        match &self.validation.brand_catalog {
            Some(path) => BrandDirectory::from_file(path),
            None => Ok(BrandDirectory::luxottica()),
        }
    }
}
