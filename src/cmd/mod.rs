use std::path::PathBuf;

use clap::{arg, command, Parser};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CmdArgs {
    /// Local pathname or a remote host with optional path (@alias:[path])
    pub source: String,

    /// Local pathname or a remote host with optional path (@alias:[path])
    pub target: String,

    /// Path to the alias configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print alias resolution details
    #[arg(long)]
    pub debug: bool,

    /// Suppress non-error messages
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,

    /// Transfer binary to delegate to
    #[arg(long, env = "SCP_RS_BIN", default_value = "scp", hide = true)]
    pub scp_bin: String,
}
