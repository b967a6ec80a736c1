//! depaudit binary entry point.

use clap::Parser;
use depaudit::cli::{Cli, Commands};
use depaudit::config::AppSettings;
use depaudit::error::CliResult;
use depaudit::output;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = dispatch(&cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing with an env-filter; `--verbose` raises the level.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "depaudit=debug"
    } else {
        "depaudit=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: &Cli) -> CliResult<()> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load()?,
    };

    match &cli.command {
        Commands::Run(cmd) => cmd.execute(&settings, cli.verbose, cli.quiet),
        Commands::Report(cmd) => cmd.execute(&settings, cli.verbose, cli.quiet),
    }
}
