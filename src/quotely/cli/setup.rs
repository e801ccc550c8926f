use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quotely", bin_name = "quotely", version)]
#[command(about = "Interactive quote builder for small businesses", long_about = None)]
pub struct Cli {
    /// Directory holding the data file and config.json
    #[arg(long, env = "QUOTELY_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use the per-user data directory instead of ./data
    #[arg(short, long)]
    pub global: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Logs go to stderr so prompts and results on stdout stay clean.
/// `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
