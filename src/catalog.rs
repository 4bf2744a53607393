use serde::Serialize;

/// A license the generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    /// Short selector used on the command line and in config files
    pub key: &'static str,
    /// Human-readable license name, as shown in listings
    pub identifier: &'static str,
    /// Name of the template text inside the template source
    pub resource_name: &'static str,
}

impl TemplateDescriptor {
    /// One-line description shown next to the identifier in listings
    pub fn description(&self) -> String {
        format!("Create a LICENSE for the {}", self.identifier)
    }
}

const CATALOG: [TemplateDescriptor; 11] = [
    TemplateDescriptor {
        key: "agpl-3.0",
        identifier: "GNU AGPLv3",
        resource_name: "agpl-3.0.txt",
    },
    TemplateDescriptor {
        key: "gpl-3.0",
        identifier: "GNU GPLv3",
        resource_name: "gpl-3.0.txt",
    },
    TemplateDescriptor {
        key: "lgpl-3.0",
        identifier: "GNU LGPLv3",
        resource_name: "lgpl-3.0.txt",
    },
    TemplateDescriptor {
        key: "mpl-2.0",
        identifier: "Mozilla Public License 2.0",
        resource_name: "mpl-2.0.txt",
    },
    TemplateDescriptor {
        key: "apache-2.0",
        identifier: "Apache License 2.0",
        resource_name: "apache-2.0.txt",
    },
    TemplateDescriptor {
        key: "mit",
        identifier: "MIT License",
        resource_name: "mit.txt",
    },
    TemplateDescriptor {
        key: "unlicense",
        identifier: "The Unlicense",
        resource_name: "unlicense.txt",
    },
    TemplateDescriptor {
        key: "cc0-1.0",
        identifier: "CC0-1.0",
        resource_name: "cc0-1.0.txt",
    },
    TemplateDescriptor {
        key: "cc-by-4.0",
        identifier: "CC-BY-4.0",
        resource_name: "cc-by-4.0.txt",
    },
    TemplateDescriptor {
        key: "cc-by-sa-4.0",
        identifier: "CC-BY-SA-4.0",
        resource_name: "cc-by-sa-4.0.txt",
    },
    TemplateDescriptor {
        key: "ofl-1.1",
        identifier: "SIL Open Font License",
        resource_name: "ofl-1.1.txt",
    },
];

/// The fixed template catalog, in presentation order.
pub fn list_templates() -> &'static [TemplateDescriptor] {
    &CATALOG
}

/// Find a template by key or identifier, ignoring ASCII case.
pub fn find_template(query: &str) -> Option<&'static TemplateDescriptor> {
    let query = query.trim();
    CATALOG.iter().find(|template| {
        template.key.eq_ignore_ascii_case(query) || template.identifier.eq_ignore_ascii_case(query)
    })
}
