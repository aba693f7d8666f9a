//! Size limits for directories and names
//!
//! `Limits` carries the fixed table geometry (bucket count) and the record
//! name capacity. Both are set when a directory is created or loaded and
//! never change afterwards.
//!
//! ## Name capacity
//!
//! A record stores at most `max_name_bytes` bytes of name. What happens to a
//! longer name is governed by [`NamePolicy`]:
//!
//! - `Truncate` (default): the name is cut at the last UTF-8 character
//!   boundary within capacity and a warning is logged by the caller. The cut
//!   name is what gets hashed, stored and persisted, so a lookup with the
//!   original long name will not find it.
//! - `Reject`: the insert fails with `NameTooLong`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of hash buckets
pub const DEFAULT_BUCKET_COUNT: usize = 1024;

/// Default name capacity in bytes
pub const DEFAULT_MAX_NAME_BYTES: usize = 127;

/// What to do with names longer than the record capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Cut the name to capacity
    #[default]
    Truncate,
    /// Fail with `NameTooLong`
    Reject,
}

/// Table geometry and name capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Number of hash buckets (default: 1024)
    pub bucket_count: usize,

    /// Maximum stored name length in bytes (default: 127)
    pub max_name_bytes: usize,

    /// Overlong name handling (default: truncate)
    pub name_policy: NamePolicy,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            bucket_count: DEFAULT_BUCKET_COUNT,
            max_name_bytes: DEFAULT_MAX_NAME_BYTES,
            name_policy: NamePolicy::Truncate,
        }
    }
}

/// Result of fitting a name to the record capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedName<'a> {
    /// The name as it will be stored
    pub name: Cow<'a, str>,
    /// Original length in bytes when truncation happened
    pub truncated_from: Option<usize>,
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// Four buckets force collisions; a 16-byte capacity makes truncation
    /// easy to trigger.
    pub fn with_small_limits() -> Self {
        Limits {
            bucket_count: 4,
            max_name_bytes: 16,
            name_policy: NamePolicy::Truncate,
        }
    }

    /// Check that the limits describe a usable table
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(Error::config("bucket_count must be greater than zero"));
        }
        if self.max_name_bytes == 0 {
            return Err(Error::config("max_name_bytes must be greater than zero"));
        }
        Ok(())
    }

    /// Fit a contact name to the record capacity.
    ///
    /// Empty names and names containing whitespace are rejected with
    /// `InvalidField`: the text format is whitespace-delimited and could not
    /// read them back.
    pub fn fit_name<'a>(&self, name: &'a str) -> Result<FittedName<'a>> {
        check_name_shape("name", name)?;

        if name.len() <= self.max_name_bytes {
            return Ok(FittedName {
                name: Cow::Borrowed(name),
                truncated_from: None,
            });
        }

        match self.name_policy {
            NamePolicy::Reject => Err(Error::NameTooLong {
                len: name.len(),
                max: self.max_name_bytes,
            }),
            NamePolicy::Truncate => {
                let mut cut = self.max_name_bytes;
                while !name.is_char_boundary(cut) {
                    cut -= 1;
                }
                // First character alone exceeds the capacity
                if cut == 0 {
                    return Err(Error::NameTooLong {
                        len: name.len(),
                        max: self.max_name_bytes,
                    });
                }
                Ok(FittedName {
                    name: Cow::Owned(name[..cut].to_string()),
                    truncated_from: Some(name.len()),
                })
            }
        }
    }

    /// Validate a directory name.
    ///
    /// Directory names become file names, so they are never truncated and
    /// may not contain path separators.
    pub fn validate_directory_name(&self, name: &str) -> Result<()> {
        check_name_shape("directory name", name)?;
        if name.len() > self.max_name_bytes {
            return Err(Error::NameTooLong {
                len: name.len(),
                max: self.max_name_bytes,
            });
        }
        if name.contains(&['/', '\\'][..]) || name == "." || name == ".." {
            return Err(Error::invalid_field(
                "directory name",
                format!("'{}' is not a plain file name", name),
            ));
        }
        Ok(())
    }
}

fn check_name_shape(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_field(field, "must not be empty"));
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::invalid_field(
            field,
            format!("'{}' contains whitespace or control characters", name.escape_default()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.bucket_count, 1024);
        assert_eq!(limits.max_name_bytes, 127);
        assert_eq!(limits.name_policy, NamePolicy::Truncate);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let mut limits = Limits::default();
        limits.bucket_count = 0;
        assert!(matches!(limits.validate(), Err(Error::Config { .. })));

        let mut limits = Limits::default();
        limits.max_name_bytes = 0;
        assert!(matches!(limits.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_fit_name_within_capacity_borrows() {
        let limits = Limits::with_small_limits();
        let fitted = limits.fit_name("Alice").unwrap();
        assert!(matches!(fitted.name, Cow::Borrowed("Alice")));
        assert_eq!(fitted.truncated_from, None);
    }

    #[test]
    fn test_fit_name_exactly_at_capacity() {
        let limits = Limits::with_small_limits();
        let name = "a".repeat(16);
        let fitted = limits.fit_name(&name).unwrap();
        assert_eq!(fitted.name, name);
        assert_eq!(fitted.truncated_from, None);
    }

    #[test]
    fn test_fit_name_truncates() {
        let limits = Limits::with_small_limits();
        let fitted = limits.fit_name("Bartholomew-Fitzgerald").unwrap();
        assert_eq!(fitted.name, "Bartholomew-Fitz");
        assert_eq!(fitted.truncated_from, Some(22));
    }

    #[test]
    fn test_fit_name_truncates_on_char_boundary() {
        let limits = Limits::with_small_limits();
        // 15 ASCII bytes then a 2-byte char straddling the 16-byte cut
        let name = format!("{}é", "a".repeat(15));
        let fitted = limits.fit_name(&name).unwrap();
        assert_eq!(fitted.name, "a".repeat(15));
        assert_eq!(fitted.truncated_from, Some(17));
    }

    #[test]
    fn test_fit_name_never_truncates_to_empty() {
        let limits = Limits {
            max_name_bytes: 1,
            ..Limits::default()
        };
        let result = limits.fit_name("é");
        assert!(matches!(result, Err(Error::NameTooLong { len: 2, max: 1 })));
        assert_eq!(limits.fit_name("éa").ok().map(|f| f.name), None);
        assert_eq!(limits.fit_name("ab").unwrap().name, "a");
    }

    #[test]
    fn test_fit_name_reject_policy() {
        let limits = Limits {
            name_policy: NamePolicy::Reject,
            ..Limits::with_small_limits()
        };
        let result = limits.fit_name("Bartholomew-Fitzgerald");
        assert!(matches!(result, Err(Error::NameTooLong { len: 22, max: 16 })));
    }

    #[test]
    fn test_fit_name_rejects_empty_and_whitespace() {
        let limits = Limits::default();
        assert!(matches!(limits.fit_name(""), Err(Error::InvalidField { .. })));
        assert!(matches!(
            limits.fit_name("Mary Jane"),
            Err(Error::InvalidField { .. })
        ));
        assert!(matches!(
            limits.fit_name("tab\there"),
            Err(Error::InvalidField { .. })
        ));
    }

    #[test]
    fn test_validate_directory_name() {
        let limits = Limits::default();
        assert!(limits.validate_directory_name("friends").is_ok());
        assert!(limits.validate_directory_name("friends.v2").is_ok());
        assert!(limits.validate_directory_name("a/b").is_err());
        assert!(limits.validate_directory_name("..").is_err());
        assert!(limits.validate_directory_name("").is_err());
        assert!(matches!(
            limits.validate_directory_name(&"d".repeat(128)),
            Err(Error::NameTooLong { .. })
        ));
    }

    #[test]
    fn test_name_policy_serde() {
        let json = serde_json::to_string(&NamePolicy::Reject).unwrap();
        assert_eq!(json, "\"reject\"");
        let parsed: NamePolicy = serde_json::from_str("\"truncate\"").unwrap();
        assert_eq!(parsed, NamePolicy::Truncate);
    }
}
