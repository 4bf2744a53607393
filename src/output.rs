use serde::Serialize;
use crate::catalog::TemplateDescriptor;

/// Catalog entry as printed by `list --format json`
#[derive(Debug, Serialize)]
pub struct TemplateListing {
    pub position: usize,
    pub key: &'static str,
    pub identifier: &'static str,
    pub description: String,
}

pub fn template_listings(templates: &[TemplateDescriptor]) -> Vec<TemplateListing> {
    templates
        .iter()
        .enumerate()
        .map(|(index, template)| TemplateListing {
            position: index + 1,
            key: template.key,
            identifier: template.identifier,
            description: template.description(),
        })
        .collect()
}

pub fn format_json_output(templates: &[TemplateDescriptor]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&template_listings(templates))
}

pub fn format_table_output(templates: &[TemplateDescriptor]) -> String {
    if templates.is_empty() {
        return "No templates found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("📄 License Templates ({} available)\n\n", templates.len()));

    output.push_str("┌────┬──────────────┬────────────────────────────┐\n");
    output.push_str("│  # │ Key          │ License                    │\n");
    output.push_str("├────┼──────────────┼────────────────────────────┤\n");

    for (index, template) in templates.iter().enumerate() {
        let key = truncate(template.key, 12);
        let identifier = truncate(template.identifier, 26);
        output.push_str(&format!("│ {:>2} │ {:<12} │ {:<26} │\n", index + 1, key, identifier));
    }

    output.push_str("└────┴──────────────┴────────────────────────────┘\n");
    output.push_str("\n💡 Run 'license-template generate <KEY> [PATH]' to create a LICENSE\n");

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
