//! CLI entry point — module declarations and the `run()` dispatcher

mod args;
mod extract;
mod init;
mod watch;

use args::{Args, Command};
use clap::Parser;

/// Main CLI entry point — parse args and dispatch to the appropriate handler
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    // Handle init subcommand
    if let Some(Command::Init { output, format }) = &args.command {
        return init::init_config(output, format);
    }

    if args.watch {
        return watch::run_watch_mode(&args);
    }

    extract::extract_once(&args)
}

/// Log to stderr so stdout only carries the rendered view
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}
