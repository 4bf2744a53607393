pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod init;
pub mod logging;
pub mod output;
pub mod template;

// Re-export main types for easy access
pub use catalog::{find_template, list_templates, TemplateDescriptor};
pub use error::{LicenseError, Result};
pub use generator::{has_existing_license, resolve_directory, LicenseGenerator, LICENSE_FILE_NAME};
pub use template::{substitute, RenderContext, TemplateSource};
