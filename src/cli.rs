use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "license-template")]
#[command(about = "Generate a LICENSE file from bundled license templates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available license templates
    List {
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Check whether a license file already exists
    Check {
        /// Directory, or a file inside it (default: current directory)
        path: Option<PathBuf>,
    },
    /// Create a LICENSE file from a template
    Generate {
        /// Template key or name (default: default_template from the config)
        template: Option<String>,

        /// Directory, or a file inside it (default: current directory)
        path: Option<PathBuf>,

        /// Overwrite an existing license file
        #[arg(long)]
        force: bool,

        /// Copyright holder (default: config name, then the system user)
        #[arg(long)]
        name: Option<String>,

        /// Copyright year (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Print the rendered license instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Create a license-template.toml configuration file
    Init {
        /// Default template key or name
        #[arg(short, long)]
        template: Option<String>,

        /// Copyright holder name
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
