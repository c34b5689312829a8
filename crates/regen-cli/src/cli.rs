use clap::{ArgAction, Parser};

/// Generate a static registry API tree from the configured server list.
#[derive(Parser)]
#[command(
    version,
    about,
    help_template = "{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long)]
    pub quiet: bool,

    /// Output logs as json
    #[arg(short, long)]
    pub json: bool,

    /// Provide custom config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the generated tree to this directory
    #[arg(short, long)]
    pub output: Option<String>,
}
