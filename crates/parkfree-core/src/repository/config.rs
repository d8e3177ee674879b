//! Source Configuration
//!
//! Picks the data-source variant once, at startup.

use std::str::FromStr;

use crate::domain::ConfigError;
use super::remote::RemoteSettings;

/// Which `LocationSource` backs the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Built-in examples, nothing persisted
    Seed,
    /// Browser-local key-value store
    Local,
    /// REST backend
    Remote,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Seed => "seed",
            SourceKind::Local => "local",
            SourceKind::Remote => "remote",
        }
    }
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seed" | "memory" => Ok(SourceKind::Seed),
            "local" => Ok(SourceKind::Local),
            "remote" => Ok(SourceKind::Remote),
            other => Err(ConfigError::UnknownSource(other.to_string())),
        }
    }
}

/// Resolved source selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub remote: Option<RemoteSettings>,
}

impl SourceConfig {
    pub fn seed() -> Self {
        Self { kind: SourceKind::Seed, remote: None }
    }

    /// Resolve from raw settings. Blank strings count as unset.
    ///
    /// Without an explicit `mode`: remote when URL and key are both set,
    /// else local when a store exists, else seed.
    pub fn resolve(
        url: Option<&str>,
        key: Option<&str>,
        mode: Option<&str>,
        local_available: bool,
    ) -> Result<Self, ConfigError> {
        let url = non_blank(url);
        let key = non_blank(key);
        let remote = match (url, key) {
            (Some(url), Some(key)) => Some(RemoteSettings {
                url: url.to_string(),
                key: key.to_string(),
            }),
            _ => None,
        };

        let kind = match non_blank(mode) {
            Some(mode) => mode.parse()?,
            None if remote.is_some() => SourceKind::Remote,
            None if local_available => SourceKind::Local,
            None => SourceKind::Seed,
        };

        match kind {
            SourceKind::Remote if remote.is_none() => Err(ConfigError::MissingRemoteSettings),
            SourceKind::Local if !local_available => Err(ConfigError::StorageUnavailable),
            SourceKind::Remote => Ok(Self { kind, remote }),
            _ => Ok(Self { kind, remote: None }),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
