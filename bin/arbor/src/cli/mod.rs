use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the node
    #[command(name = "node")]
    Node(NodeCommand),
}

#[derive(Debug, Parser)]
pub struct NodeCommand {
    /// Unix timestamp the chain's genesis is anchored at; defaults to now
    #[arg(long)]
    pub genesis_time: Option<u64>,

    /// Verbosity level
    #[arg(short, long, default_value_t = 3)]
    pub verbosity: u8,
}
