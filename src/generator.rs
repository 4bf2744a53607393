use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::TemplateDescriptor;
use crate::error::{LicenseError, Result};
use crate::template::{substitute, RenderContext, TemplateSource};

/// File name of the generated license, always written without extension.
pub const LICENSE_FILE_NAME: &str = "LICENSE";

/// Renders catalog templates and writes them out as `LICENSE` files.
#[derive(Debug, Clone, Default)]
pub struct LicenseGenerator {
    source: TemplateSource,
}

impl LicenseGenerator {
    /// Generator reading the templates bundled with the crate
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: TemplateSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Load the template text and substitute the context into it.
    pub fn render(&self, template: &TemplateDescriptor, context: &RenderContext) -> Result<String> {
        let text = self.source.load(template)?;
        Ok(substitute(&text, context))
    }

    /// Write `LICENSE` next to `target` using the current year and user.
    ///
    /// An existing `LICENSE` is overwritten; callers that must not clobber a
    /// license check [`has_existing_license`] first.
    pub fn generate(&self, target: &Path, template: &TemplateDescriptor) -> Result<PathBuf> {
        self.generate_with(target, template, &RenderContext::from_environment())
    }

    pub fn generate_with(
        &self,
        target: &Path,
        template: &TemplateDescriptor,
        context: &RenderContext,
    ) -> Result<PathBuf> {
        let directory = resolve_directory(target)?;
        let license_path = directory.join(LICENSE_FILE_NAME);

        let content = self.render(template, context)?;

        fs::write(&license_path, content).map_err(|source| LicenseError::Write {
            path: license_path.clone(),
            source,
        })?;

        info!(
            path = %license_path.display(),
            template = template.key,
            "wrote license file"
        );
        Ok(license_path)
    }
}

/// Directory a license for `target` is written to: the target itself when it
/// is a directory, otherwise its parent. The result is canonicalized.
pub fn resolve_directory(target: &Path) -> Result<PathBuf> {
    if target.as_os_str().is_empty() {
        return Err(invalid_target(target, "empty path"));
    }

    let directory = if target.is_dir() {
        target
    } else {
        match target.parent() {
            // A bare file name lives in the working directory
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            Some(parent) => parent,
            None => return Err(invalid_target(target, "path has no parent directory")),
        }
    };

    if !directory.is_dir() {
        return Err(invalid_target(target, "parent directory does not exist"));
    }

    let directory = directory
        .canonicalize()
        .map_err(|e| invalid_target(target, &e.to_string()))?;
    debug!(target = %target.display(), directory = %directory.display(), "resolved target directory");
    Ok(directory)
}

fn invalid_target(target: &Path, reason: &str) -> LicenseError {
    LicenseError::InvalidTarget {
        path: target.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Whether `directory` already holds a license file.
///
/// Only the immediate entries are inspected. An entry counts when its name
/// without the last extension is `license` in any case, so `LICENSE`,
/// `License.txt` and `license.md` all match while `LICENSES.md` does not.
pub fn has_existing_license(directory: &Path) -> Result<bool> {
    let unreadable = |source| LicenseError::DirectoryUnreadable {
        path: directory.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(directory).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();
        let is_license = path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().eq_ignore_ascii_case("license"));
        if is_license {
            debug!(path = %path.display(), "found existing license");
            return Ok(true);
        }
    }

    Ok(false)
}
