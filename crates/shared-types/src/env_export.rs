//! Dotenv-to-shell export.
//!
//! Reads a dotenv file and renders selected entries as `export KEY='VALUE'`
//! lines that a POSIX shell can `eval`.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::EnvExportError;

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Keys exported when none are requested: the backend endpoint the UI
/// connects to.
pub const DEFAULT_KEYS: &[&str] = &["HOST", "PORT"];

/// Values the backend server falls back to when its dotenv file leaves a
/// setting out.
pub const SERVER_DEFAULTS: &[(&str, &str)] = &[
    ("HOST", "0.0.0.0"),
    ("PORT", "8000"),
    ("LOG_LEVEL", "INFO"),
    (
        "LOG_FORMAT",
        "%(asctime)s - %(name)s - %(levelname)s - %(message)s",
    ),
    ("CORS_ORIGINS", "*"),
];

/// The server's fallback for `key`, if it has one.
pub fn server_default(key: &str) -> Option<&'static str> {
    SERVER_DEFAULTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// One variable ready to be exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvExport {
    pub key: String,
    pub value: String,
}

impl EnvExport {
    pub fn to_shell(&self) -> String {
        format!("export {}={}", self.key, shell_quote(&self.value))
    }
}

/// Single-quote `value` for a POSIX shell.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Read every entry of a dotenv file, in file order.
pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, EnvExportError> {
    let iter = dotenvy::from_path_iter(path)
        .map_err(|err| EnvExportError::from_dotenv(path.to_path_buf(), err))?;
    iter.map(|entry| entry.map_err(|err| EnvExportError::from_dotenv(path.to_path_buf(), err)))
        .collect()
}

/// Parse dotenv content from any reader. `origin` is only used in errors.
pub fn parse_env<R: Read>(reader: R, origin: &Path) -> Result<Vec<(String, String)>, EnvExportError> {
    dotenvy::from_read_iter(reader)
        .map(|entry| entry.map_err(|err| EnvExportError::from_dotenv(origin.to_path_buf(), err)))
        .collect()
}

/// Which keys to pull from which file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub path: PathBuf,
    pub keys: Vec<String>,
    /// Skip absent keys instead of failing.
    pub optional: bool,
    /// Fill absent keys from [`SERVER_DEFAULTS`] before giving up on them.
    pub defaults: bool,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENV_FILE),
            keys: DEFAULT_KEYS.iter().map(|key| key.to_string()).collect(),
            optional: false,
            defaults: true,
        }
    }
}

impl ExportRequest {
    /// Read the file and select the requested keys.
    pub fn run(&self) -> Result<Vec<EnvExport>, EnvExportError> {
        self.validate_keys()?;
        let entries = read_env_file(&self.path)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "read dotenv file");
        self.select(&entries)
    }

    pub fn validate_keys(&self) -> Result<(), EnvExportError> {
        match self.keys.iter().find(|key| !is_valid_key(key)) {
            Some(bad) => Err(EnvExportError::InvalidKey(bad.clone())),
            None => Ok(()),
        }
    }

    /// Pick the requested keys out of parsed entries, in request order.
    ///
    /// When a key is defined more than once the last definition wins. An
    /// absent key takes the server default when `defaults` is set, is
    /// skipped when `optional` is set, and is an error otherwise.
    pub fn select(&self, entries: &[(String, String)]) -> Result<Vec<EnvExport>, EnvExportError> {
        let mut exports = Vec::with_capacity(self.keys.len());
        for key in &self.keys {
            let found = entries.iter().rev().find(|(name, _)| name == key);
            let value = match found {
                Some((_, value)) => value.clone(),
                None => match server_default(key).filter(|_| self.defaults) {
                    Some(fallback) => {
                        tracing::debug!(%key, fallback, "key not set, using server default");
                        fallback.to_string()
                    }
                    None if self.optional => {
                        tracing::warn!(%key, path = %self.path.display(), "key not set, skipping");
                        continue;
                    }
                    None => {
                        return Err(EnvExportError::MissingKey {
                            key: key.clone(),
                            path: self.path.clone(),
                        })
                    }
                },
            };
            exports.push(EnvExport {
                key: key.clone(),
                value,
            });
        }
        Ok(exports)
    }
}
