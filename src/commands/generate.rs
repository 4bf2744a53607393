use anyhow::{Context, Result};
use std::path::PathBuf;
use license_template::config::{load_config, Config};
use license_template::template::current_year;
use license_template::{
    find_template, has_existing_license, resolve_directory, LicenseGenerator, RenderContext,
    TemplateDescriptor,
};

pub struct GenerateArgs {
    pub template: Option<String>,
    pub path: Option<PathBuf>,
    pub force: bool,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub stdout: bool,
}

pub fn handle_generate(args: GenerateArgs, quiet: bool) -> Result<()> {
    let config = load_config()?;
    let template = select_template(args.template.as_deref(), &config)?;
    let generator = LicenseGenerator::with_source(config.template_source());

    // CLI arguments override config values, which override the environment
    let context = match args.name.or_else(|| config.name.clone()) {
        Some(name) => RenderContext::new(args.year.unwrap_or_else(current_year), name),
        None => {
            let mut context = RenderContext::from_environment();
            if let Some(year) = args.year {
                context.year = year;
            }
            context
        }
    };

    if args.stdout {
        print!("{}", generator.render(template, &context)?);
        return Ok(());
    }

    let target = args.path.unwrap_or_else(|| PathBuf::from("."));
    let directory = resolve_directory(&target)?;

    if !args.force && has_existing_license(&directory)? {
        if !quiet {
            eprintln!(
                "A license file already exists in {}. Use --force to overwrite it.",
                directory.display()
            );
        }
        std::process::exit(1);
    }

    let written = generator
        .generate_with(&target, template, &context)
        .with_context(|| format!("Failed to generate {} license", template.identifier))?;

    if !quiet {
        println!("✅ Created {} ({})", written.display(), template.identifier);
    }

    Ok(())
}

fn select_template(query: Option<&str>, config: &Config) -> Result<&'static TemplateDescriptor> {
    match query {
        Some(query) => find_template(query).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown template '{}'. Run 'license-template list' to see available templates.",
                query
            )
        }),
        None => config.default_template()?.ok_or_else(|| {
            anyhow::anyhow!(
                "No template given and no default_template configured. \
                 Pass a template or run 'license-template init --template <KEY>'."
            )
        }),
    }
}
