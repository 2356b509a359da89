//! Host alias table.
//!
//! Aliases live in a TOML file (default `<config dir>/scp-rs/aliases.toml`)
//! keyed by the alias itself:
//!
//! ```toml
//! ["@prod"]
//! host = "example.com"
//! port = 2222
//! path = "/var/www"
//!
//! ["@staging"]
//! ssh = "deploy@staging.example.com:2222"
//! key = "/home/me/.ssh/id_ed25519"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::Error;

/// Key format for alias table entries, e.g. `@prod`.
const ALIAS_KEY_PATTERN: &str = r"^@[A-Za-z0-9_.-]+";

/// Anything of the form `@...` without a `$` placeholder character is
/// treated as an alias reference rather than a local path.
const ALIAS_REFERENCE_PATTERN: &str = r"^@[^$]+$";

/// Connection parameters an alias resolves to. Every field is optional
/// and absent fields stay `None` through the merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasBits {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub key: Option<String>,
    /// `user@host[:port]` shortcut, replaces `host` outright when set.
    pub ssh: Option<String>,
}

/// Alias table loaded once per invocation, read-only afterwards.
///
/// The table owns both alias patterns so the key format is declared in
/// one place. They are compiled when the table is constructed and
/// borrowed from there for the rest of the run.
#[derive(Debug)]
pub struct AliasTable {
    entries: HashMap<String, AliasBits>,
    reference: Regex,
    key: Regex,
}

impl AliasTable {
    pub fn new(entries: HashMap<String, AliasBits>) -> Self {
        Self {
            entries,
            reference: Regex::new(ALIAS_REFERENCE_PATTERN).expect("alias reference pattern"),
            key: Regex::new(ALIAS_KEY_PATTERN).expect("alias key pattern"),
        }
    }

    /// Load the alias table from `path`, or from the default location
    /// when none is given. A missing default file yields an empty table;
    /// a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };
        if !explicit && !path.exists() {
            return Ok(Self::new(HashMap::new()));
        }
        let raw = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let entries = toml::from_str(&raw).map_err(|source| Error::ConfigParse { path, source })?;
        Ok(Self::new(entries))
    }

    pub fn get(&self, key: &str) -> Option<&AliasBits> {
        self.entries.get(key)
    }

    /// Whether `token` should be treated as an alias reference at all.
    pub fn is_reference(&self, token: &str) -> bool {
        self.reference.is_match(token)
    }

    /// Extract the candidate alias key from the front of `token`, e.g.
    /// `@prod` out of `@prod:logs`.
    pub fn extract_key<'t>(&self, token: &'t str) -> Option<&'t str> {
        self.key.find(token).map(|m| m.as_str())
    }
}

fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scp-rs")
        .join("aliases.toml")
}
