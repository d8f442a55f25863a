use crate::compiler::DEFAULT_BINARY;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "eznm")]
#[command(about = "Build an nmap command line with an interactive form")]
pub struct Cli {
    /// Program name placed in front of the generated arguments
    #[arg(short, long, default_value = DEFAULT_BINARY)]
    pub binary: String,

    /// Print a JSON object (binary, args, command, configuration) instead of a command line
    #[arg(long)]
    pub json: bool,

    /// Disable colors in the form
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
