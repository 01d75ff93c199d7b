use crate::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bankdash")]
#[command(about = "Banking dashboard client: session and cards page from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
