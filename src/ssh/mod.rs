use tracing::debug;

use crate::alias::{AliasBits, AliasTable};
use crate::error::Error;

/// A token turned into a shell-ready argument. Escaping happens here, at
/// the point of resolution, never later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub arg: String,
    /// Identity file carried over from the alias, if any.
    pub identity: Option<String>,
}

/// Quote a single word for use in a shell command line.
pub fn escape(word: &str) -> String {
    shell_words::join([word])
}

/// Resolve a source or target token.
///
/// Alias references are looked up in the table and merged into a
/// connection string; an unknown alias key is fatal and never falls
/// through to being treated as a local path. Anything else is returned
/// shell-escaped and otherwise unmodified.
pub fn resolve_token(token: &str, aliases: &AliasTable) -> Result<ResolvedToken, Error> {
    if !aliases.is_reference(token) {
        return Ok(ResolvedToken {
            arg: escape(token),
            identity: None,
        });
    }

    let key = aliases
        .extract_key(token)
        .ok_or_else(|| Error::UnknownAlias(token.to_string()))?;
    let Some(bits) = aliases.get(key) else {
        return Err(Error::UnknownAlias(key.to_string()));
    };
    let subpath = token[key.len()..].trim_start_matches(':');
    Ok(ResolvedToken {
        arg: merge_bits_and_path(bits, subpath)?,
        identity: bits.key.clone(),
    })
}

/// Merge host, port, and path into a single scp connection string of the
/// form `[scp://]host[:port][:path]`, shell-escaped.
pub fn merge_bits_and_path(bits: &AliasBits, subpath: &str) -> Result<String, Error> {
    let fields = [
        ("scheme", bits.scheme.clone()),
        ("user", bits.user.clone()),
        ("host", bits.host.clone()),
        ("port", bits.port.map(|p| p.to_string())),
        ("path", bits.path.clone()),
        ("key", bits.key.clone()),
        ("ssh", bits.ssh.clone()),
    ];
    for (name, value) in fields {
        debug!("ssh {}: {}", name, value.unwrap_or_default());
    }

    // Default scheme is ssh.
    match bits.scheme.as_deref() {
        None | Some("ssh") => {}
        Some(other) => return Err(Error::UnsupportedScheme(other.to_string())),
    }

    let mut host = match (&bits.ssh, &bits.user) {
        (Some(ssh), _) => ssh.clone(),
        (None, Some(user)) => format!("{user}@{}", bits.host.as_deref().unwrap_or_default()),
        (None, None) => bits.host.clone().unwrap_or_default(),
    };

    // Compact `host:port` syntax carries the port in the host string.
    let mut port = bits.port;
    if port.is_none() {
        if let Some((head, digits)) = host.rsplit_once(':') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(parsed) = digits.parse::<u16>() {
                    port = Some(parsed);
                    host.truncate(head.len());
                }
            }
        }
    }

    let base = bits.path.as_deref().unwrap_or_default().trim_end_matches('/');
    let sub = subpath.trim_start_matches('/');
    let path = if sub.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{sub}")
    };

    let mut merged = match port {
        Some(port) => format!("scp://{host}:{port}"),
        None => host,
    };
    if !path.is_empty() {
        merged.push(':');
        merged.push_str(&path);
    }

    Ok(escape(&merged))
}
