use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::catalog::{find_template, TemplateDescriptor};
use crate::template::TemplateSource;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "license-template.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Template used when `generate` is run without one (key or identifier)
    pub default_template: Option<String>,

    /// Copyright holder name, replacing the system user name
    pub name: Option<String>,

    /// Directory holding replacement template texts
    pub template_dir: Option<PathBuf>,

    /// Output format for `list` (table, json)
    pub format: Option<String>,
}

impl Config {
    /// Catalog entry named by `default_template`, if one is configured.
    pub fn default_template(&self) -> Result<Option<&'static TemplateDescriptor>> {
        match &self.default_template {
            Some(query) => find_template(query)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("Unknown default_template '{}'. Run 'license-template list' to see available templates.", query)),
            None => Ok(None),
        }
    }

    pub fn template_source(&self) -> TemplateSource {
        match &self.template_dir {
            Some(dir) => TemplateSource::Directory(dir.clone()),
            None => TemplateSource::Bundled,
        }
    }

    /// Check the values serde cannot: template names, formats and paths.
    pub fn validate(&self) -> Result<()> {
        self.default_template()?;

        if let Some(format) = self.format.as_deref() {
            if !matches!(format, "table" | "json") {
                anyhow::bail!("Invalid format '{}': expected 'table' or 'json'", format);
            }
        }

        if let Some(dir) = &self.template_dir {
            if !dir.is_dir() {
                anyhow::bail!("template_dir is not a directory: {}", dir.display());
            }
        }

        Ok(())
    }
}

pub fn get_config_file_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// Load configuration from license-template.toml in the working directory
pub fn load_config() -> Result<Config> {
    load_config_from(get_config_file_path())
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    // Relative template directories are relative to the config file
    if let Some(dir) = config.template_dir.take() {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.template_dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
    }

    Ok(config)
}
