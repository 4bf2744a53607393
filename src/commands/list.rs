use anyhow::Result;
use crate::cli::OutputFormat;
use license_template::config::load_config;
use license_template::list_templates;
use license_template::output::{format_json_output, format_table_output};

pub fn handle_list(format: Option<OutputFormat>, quiet: bool) -> Result<()> {
    let config = load_config()?;

    // CLI argument overrides config value
    let format = format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    });

    let output = match format {
        OutputFormat::Json => format_json_output(list_templates())?,
        OutputFormat::Table => format_table_output(list_templates()),
    };

    if !quiet {
        println!("{}", output);
    }

    Ok(())
}
