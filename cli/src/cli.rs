use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "layerhost",
    version = layerhost_core::version(),
    about = "layerhost - a stacked overlay host with demos to poke at it",
)]
pub struct Args {
    /// Demo scenario to run (see --list-demos)
    #[arg(
        short = 'd',
        long = "demo",
        value_name = "NAME",
        default_value = "dialog"
    )]
    pub demo: String,

    /// List the available demo scenarios and exit
    #[arg(long = "list-demos")]
    pub list_demos: bool,

    /// Specify custom configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Specify custom configuration file path"
    )]
    pub config_path: Option<PathBuf>,

    /// Open the configuration file in the system editor and exit
    #[arg(long = "open-config")]
    pub open_config: bool,

    /// Hide debug output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Show trace output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
