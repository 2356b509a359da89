use std::io;
use std::path::PathBuf;

/// Errors produced while resolving aliases and delegating the transfer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no alias found with key '{0}'")]
    UnknownAlias(String),

    #[error("unsupported scheme '{0}', only ssh hosts can be copied to")]
    UnsupportedScheme(String),

    #[error("cannot copy over scp using the provided configuration")]
    AccessDenied,

    #[error("cannot read alias file {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("malformed alias file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to run the transfer binary: {0}")]
    Spawn(#[from] io::Error),
}
