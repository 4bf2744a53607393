use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LicenseError {
    /// The template text could not be loaded. Bundled texts are compiled in,
    /// so this is a packaging defect or a broken `template_dir`.
    #[error("failed to load license template '{resource}': {reason}")]
    ResourceLoad { resource: String, reason: String },

    #[error("invalid target '{}': {reason}", path.display())]
    InvalidTarget { path: PathBuf, reason: String },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot list directory {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LicenseError>;
