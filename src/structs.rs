use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Mode,
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run a tracker: UDP endpoint, liveness sweeps and federation listeners.
    Tracker,
    /// Run an interactive peer.
    Peer,
}
