use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr logger used by the command-line tool.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_cli_logger(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "license_template=debug,info"
    } else if quiet {
        "warn"
    } else {
        "license_template=info,warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
