use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use license_template::logging::init_cli_logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose, cli.quiet);

    match cli.command {
        Commands::List { format } => commands::handle_list(format, cli.quiet),
        Commands::Check { path } => commands::handle_check(path, cli.quiet),
        Commands::Generate {
            template,
            path,
            force,
            name,
            year,
            stdout,
        } => commands::handle_generate(
            commands::GenerateArgs {
                template,
                path,
                force,
                name,
                year,
                stdout,
            },
            cli.quiet,
        ),
        Commands::Init { template, name, force } => {
            commands::handle_init(template, name, force, cli.quiet)
        }
        Commands::Config { show, validate } => commands::handle_config(show, validate, cli.quiet),
    }
}
