use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hard75-tui")]
#[command(about = "Terminal UI for the 75 Hard daily-habit tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the tracker against the configured backend (default)
    Run,
    /// Print config path and create a default file if missing
    ConfigPath,
}
