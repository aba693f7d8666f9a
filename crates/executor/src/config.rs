//! Configuration via `contactdb.toml`
//!
//! The config file controls where new directories are written and the table
//! geometry used for every directory created or loaded in a session. A
//! missing file means defaults.

use std::path::{Path, PathBuf};

use contactdb_core::{
    Error, Limits, NamePolicy, Result, DEFAULT_BUCKET_COUNT, DEFAULT_MAX_NAME_BYTES,
};
use serde::{Deserialize, Serialize};

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "contactdb.toml";

/// Session configuration loaded from `contactdb.toml`.
///
/// # Example
///
/// ```toml
/// data_dir = "."
/// bucket_count = 1024
/// max_name_bytes = 127
/// name_policy = "truncate"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDbConfig {
    /// Directory that receives files of newly created contacts logs.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Number of hash buckets.
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
    /// Name capacity in bytes.
    #[serde(default = "default_max_name_bytes")]
    pub max_name_bytes: usize,
    /// `"truncate"` or `"reject"` for names over capacity.
    #[serde(default)]
    pub name_policy: NamePolicy,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_bucket_count() -> usize {
    DEFAULT_BUCKET_COUNT
}

fn default_max_name_bytes() -> usize {
    DEFAULT_MAX_NAME_BYTES
}

impl Default for ContactDbConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bucket_count: default_bucket_count(),
            max_name_bytes: default_max_name_bytes(),
            name_policy: NamePolicy::default(),
        }
    }
}

impl ContactDbConfig {
    /// Table limits described by this config.
    pub fn limits(&self) -> Limits {
        Limits {
            bucket_count: self.bucket_count,
            max_name_bytes: self.max_name_bytes,
            name_policy: self.name_policy,
        }
    }

    /// Builder-style override of the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# ContactDB configuration
#
# Directory where newly created contacts logs are written.
# Logs loaded from a file are written back next to that file.
data_dir = "."

# Number of hash buckets (default: 1024)
bucket_count = 1024

# Longest stored contact name in bytes (default: 127)
max_name_bytes = 127

# What to do with longer names: "truncate" (default) or "reject"
name_policy = "truncate"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read, parsed, or
    /// describes an unusable table.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: ContactDbConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.limits().validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` if a file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            Error::config(format!(
                "failed to write default config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }

    /// Load `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
