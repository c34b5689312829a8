use std::path::PathBuf;

use clap::Parser;
use cli::Args;
use logging::setup_logging;
use regen_config::CONFIG_PATH;

mod build;
mod cli;
mod error;
mod logging;

fn handle_cli() -> error::Result<()> {
    let args = Args::parse();

    setup_logging(&args);

    if let Some(ref config) = args.config {
        let mut config_path = CONFIG_PATH.write().unwrap();
        *config_path = PathBuf::from(config);
    }

    let output_root = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(build::DEFAULT_OUTPUT_ROOT));

    build::run_build(&output_root)
}

fn main() {
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
