use std::io;
use std::process::Command;

use tracing::debug;

use crate::alias::AliasTable;
use crate::error::Error;
use crate::ssh::{escape, resolve_token};

/// Exit status scp reports for connection or configuration failures.
pub const ACCESS_DENIED: i32 = 255;

/// Process-execution seam: one blocking call taking the final command
/// line and returning the child's exit code.
pub trait Transfer {
    fn transfer(&self, command: &str) -> io::Result<i32>;
}

/// Runs the command line through `sh -c` with inherited stdio, so the
/// transfer binary streams directly to the invoking terminal, and waits
/// for the child to finish.
pub struct ScpProcess;

impl Transfer for ScpProcess {
    fn transfer(&self, command: &str) -> io::Result<i32> {
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        // A signal-terminated child carries no exit code; report failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Resolve both tokens, delegate to the transfer binary, and map its
/// exit status. A resolution failure on either token aborts before any
/// process is spawned. Exit status 255 becomes a fatal error; every
/// other status, including success, propagates unchanged.
pub fn copy<T: Transfer>(
    source: &str,
    target: &str,
    scp_bin: &str,
    aliases: &AliasTable,
    transfer: &T,
) -> Result<i32, Error> {
    let source = resolve_token(source, aliases)?;
    let target = resolve_token(target, aliases)?;

    let mut command = escape(scp_bin);
    if let Some(identity) = source.identity.as_deref().or(target.identity.as_deref()) {
        command.push_str(" -i ");
        command.push_str(&escape(identity));
    }
    command.push(' ');
    command.push_str(&source.arg);
    command.push(' ');
    command.push_str(&target.arg);

    debug!("delegating: {}", command);
    let code = transfer.transfer(&command)?;
    if code == ACCESS_DENIED {
        return Err(Error::AccessDenied);
    }
    Ok(code)
}
