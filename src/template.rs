use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use chrono::Datelike;
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::TemplateDescriptor;
use crate::error::{LicenseError, Result};

pub const YEAR_TOKEN: &str = "{$YEAR}";
pub const NAME_TOKEN: &str = "{$NAME}";

/// Environment variables consulted, in order, for the current user name
const USER_NAME_VARS: [&str; 3] = ["USER", "USERNAME", "LOGNAME"];

/// Values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub year: i32,
    pub user_name: String,
}

impl RenderContext {
    pub fn new(year: i32, user_name: impl Into<String>) -> Self {
        Self {
            year,
            user_name: user_name.into(),
        }
    }

    /// Current local year and the name of the user owning this process.
    pub fn from_environment() -> Self {
        let year = current_year();
        let user_name = current_user_name().unwrap_or_else(|| {
            warn!("no user name found in USER, USERNAME or LOGNAME");
            String::new()
        });
        Self { year, user_name }
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn current_user_name() -> Option<String> {
    USER_NAME_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
}

/// Replace every placeholder token in `text`.
pub fn substitute(text: &str, context: &RenderContext) -> String {
    text.replace(YEAR_TOKEN, &context.year.to_string())
        .replace(NAME_TOKEN, &context.user_name)
}

/// Where template texts are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Texts compiled into the binary
    #[default]
    Bundled,
    /// Texts read from `<dir>/<resource_name>` at render time
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn load(&self, template: &TemplateDescriptor) -> Result<Cow<'static, str>> {
        match self {
            TemplateSource::Bundled => {
                debug!(resource = template.resource_name, "loading bundled template");
                bundled_text(template.resource_name)
                    .map(Cow::Borrowed)
                    .ok_or_else(|| LicenseError::ResourceLoad {
                        resource: template.resource_name.to_string(),
                        reason: "no bundled template with this name".to_string(),
                    })
            }
            TemplateSource::Directory(dir) => {
                let path = dir.join(template.resource_name);
                debug!(path = %path.display(), "loading template from directory");
                fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|e| LicenseError::ResourceLoad {
                        resource: path.display().to_string(),
                        reason: e.to_string(),
                    })
            }
        }
    }
}

/// Look up a bundled template text by resource name.
pub fn bundled_text(resource_name: &str) -> Option<&'static str> {
    let text = match resource_name {
        "agpl-3.0.txt" => include_str!("../templates/agpl-3.0.txt"),
        "gpl-3.0.txt" => include_str!("../templates/gpl-3.0.txt"),
        "lgpl-3.0.txt" => include_str!("../templates/lgpl-3.0.txt"),
        "mpl-2.0.txt" => include_str!("../templates/mpl-2.0.txt"),
        "apache-2.0.txt" => include_str!("../templates/apache-2.0.txt"),
        "mit.txt" => include_str!("../templates/mit.txt"),
        "unlicense.txt" => include_str!("../templates/unlicense.txt"),
        "cc0-1.0.txt" => include_str!("../templates/cc0-1.0.txt"),
        "cc-by-4.0.txt" => include_str!("../templates/cc-by-4.0.txt"),
        "cc-by-sa-4.0.txt" => include_str!("../templates/cc-by-sa-4.0.txt"),
        "ofl-1.1.txt" => include_str!("../templates/ofl-1.1.txt"),
        _ => return None,
    };
    Some(text)
}
