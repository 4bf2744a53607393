use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use crate::catalog::TemplateDescriptor;
use crate::config::get_config_file_path;

const PRESET: &str = include_str!("../presets/license-template.toml");

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub template: Option<&'static TemplateDescriptor>,
    pub name: Option<String>,
    pub force: bool,
}

/// Write license-template.toml into the working directory
pub fn generate_config(options: &InitOptions) -> Result<PathBuf> {
    let path = get_config_file_path();
    generate_config_at_path(&path, options)?;
    Ok(path)
}

pub fn generate_config_at_path<P: AsRef<Path>>(path: P, options: &InitOptions) -> Result<()> {
    let config_path = path.as_ref();

    if config_path.exists() && !options.force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        ));
    }

    let content = render_preset(options)?;
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "wrote configuration");

    Ok(())
}

/// Fill the embedded preset, keeping its comments intact
fn render_preset(options: &InitOptions) -> Result<String> {
    let mut doc = PRESET
        .parse::<toml_edit::DocumentMut>()
        .context("Invalid embedded preset")?;

    if let Some(template) = options.template {
        doc["default_template"] = toml_edit::value(template.key);
    }
    if let Some(name) = &options.name {
        doc["name"] = toml_edit::value(name.as_str());
    }

    Ok(doc.to_string())
}
