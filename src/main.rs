//! CLI entry point for quietpage.

mod app;
mod cli;

use clap::Parser;
use quietpage::build_info::cli_version_text;
use tracing_subscriber::EnvFilter;

/// Log filter variable; defaults to warnings only.
const LOG_ENV: &str = "QUIETPAGE_LOG";

fn main() {
    let args = cli::Args::parse();
    if args.version {
        println!("{}", cli_version_text());
        return;
    }

    init_logging();
    std::process::exit(app::entry::run(args));
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
