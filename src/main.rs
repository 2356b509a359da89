use std::{env, process};

use alias::AliasTable;
use clap::Parser;
use cmd::CmdArgs;
use console::style;
use error::Error;
use exec::{ScpProcess, ACCESS_DENIED};
use tracing_subscriber::EnvFilter;

mod alias;
mod cmd;
mod error;
mod exec;
mod ssh;

fn main() {
    let cmds = CmdArgs::parse_from(env::args_os());
    init_tracing(&cmds);
    process::exit(run(&cmds));
}

fn run(cmds: &CmdArgs) -> i32 {
    let aliases = match AliasTable::load(cmds.config.as_deref()) {
        Ok(aliases) => aliases,
        Err(e) => return fail(&e),
    };
    match exec::copy(
        &cmds.source,
        &cmds.target,
        &cmds.scp_bin,
        &aliases,
        &ScpProcess,
    ) {
        Ok(code) => code,
        Err(e) => fail(&e),
    }
}

fn fail(err: &Error) -> i32 {
    eprintln!("{} {}", style("error:").red().bold(), err);
    match err {
        Error::AccessDenied => ACCESS_DENIED,
        _ => 1,
    }
}

fn init_tracing(cmds: &CmdArgs) {
    let level = if cmds.debug {
        "debug"
    } else if cmds.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
