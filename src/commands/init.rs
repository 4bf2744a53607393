use anyhow::Result;
use license_template::find_template;
use license_template::init::{generate_config, InitOptions};

pub fn handle_init(template: Option<String>, name: Option<String>, force: bool, quiet: bool) -> Result<()> {
    let template = match template.as_deref() {
        Some(query) => Some(find_template(query).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown template '{}'. Run 'license-template list' to see available templates.",
                query
            )
        })?),
        None => None,
    };

    let path = generate_config(&InitOptions { template, name, force })?;

    if !quiet {
        println!("✅ Configuration written to {}", path.display());
    }

    Ok(())
}
