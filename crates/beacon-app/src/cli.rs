use std::path::PathBuf;

use clap::Parser;

/// beacon — mirrors editor state to a presence display over a local channel.
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. beacon=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Host state file override.
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Unix socket of the presence-display client; stdout when omitted.
    #[arg(long)]
    pub socket: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
