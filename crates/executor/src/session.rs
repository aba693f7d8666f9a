//! Stateful session holding at most one contacts log.
//!
//! The [`Session`] enforces the single-active-directory rule: create and
//! read operations fail with `AlreadyActive` while a log is loaded, and every
//! other operation fails with `NoActiveDirectory` when none is. A failed
//! operation never changes which log is active.
//!
//! # Usage
//!
//! ```
//! use contactdb_executor::{ContactDbConfig, Session};
//!
//! let mut session = Session::new(ContactDbConfig::default());
//! session.create_log("friends")?;
//! session.add_contact("Bob", 6125551234, 55414)?;
//! assert_eq!(session.lookup("Carol")?, None);
//! # Ok::<(), contactdb_executor::Error>(())
//! ```

use std::path::{Path, PathBuf};

use contactdb_core::{ContactRecord, Error, Limits, PhoneNumber, Result};
use contactdb_storage::codec::{codec_for_path, BinaryCodec, DirectoryCodec, TextCodec};
use contactdb_storage::{persist, Directory};
use tracing::debug;

use crate::config::ContactDbConfig;
use crate::{Command, Output};

/// The loaded log and the directory its files are written to
#[derive(Debug)]
struct ActiveDirectory {
    directory: Directory,
    home: PathBuf,
}

/// A single-user session over at most one contacts log.
#[derive(Debug)]
pub struct Session {
    config: ContactDbConfig,
    active: Option<ActiveDirectory>,
}

impl Session {
    /// Create a session with no active log.
    pub fn new(config: ContactDbConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &ContactDbConfig {
        &self.config
    }

    /// Whether a log is loaded.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The active log, if any.
    pub fn directory(&self) -> Option<&Directory> {
        self.active.as_ref().map(|a| &a.directory)
    }

    /// Directory the active log is written to.
    pub fn home(&self) -> Option<&Path> {
        self.active.as_ref().map(|a| a.home.as_path())
    }

    fn limits(&self) -> Limits {
        self.config.limits()
    }

    fn ensure_inactive(&self) -> Result<()> {
        match &self.active {
            Some(active) => Err(Error::AlreadyActive {
                name: active.directory.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    fn active(&self) -> Result<&ActiveDirectory> {
        self.active.as_ref().ok_or(Error::NoActiveDirectory)
    }

    fn active_mut(&mut self) -> Result<&mut ActiveDirectory> {
        self.active.as_mut().ok_or(Error::NoActiveDirectory)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create an empty log named `name`, written to the configured data dir.
    pub fn create_log(&mut self, name: &str) -> Result<()> {
        self.ensure_inactive()?;
        let directory = Directory::with_limits(name, self.limits())?;
        self.active = Some(ActiveDirectory {
            directory,
            home: self.config.data_dir.clone(),
        });
        Ok(())
    }

    /// Name of the active log.
    pub fn current_log_name(&self) -> Result<&str> {
        Ok(self.active()?.directory.name())
    }

    /// Release the active log. Returns the number of records released.
    pub fn clear(&mut self) -> Result<usize> {
        let active = self.active.take().ok_or(Error::NoActiveDirectory)?;
        Ok(active.directory.clear())
    }

    /// Load a `.txt` file as the active log.
    pub fn read_text(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_with(&TextCodec, path.as_ref())
    }

    /// Load a `.bin` file as the active log.
    pub fn read_binary(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_with(&BinaryCodec, path.as_ref())
    }

    /// Load a file as the active log, choosing the codec by extension.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.ensure_inactive()?;
        let codec = codec_for_path(path)?;
        self.read_with(codec.as_ref(), path)
    }

    fn read_with(&mut self, codec: &dyn DirectoryCodec, path: &Path) -> Result<()> {
        self.ensure_inactive()?;
        let directory = contactdb_storage::load(codec, path, &self.limits())?;
        self.active = Some(ActiveDirectory {
            directory,
            home: persist::home_of(path),
        });
        Ok(())
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Add a contact to the active log.
    pub fn add_contact(&mut self, name: &str, phone: u64, zip: u32) -> Result<()> {
        self.active_mut()?.directory.add(name, phone, zip)
    }

    /// Phone number of the first contact named exactly `name`.
    pub fn lookup(&self, name: &str) -> Result<Option<PhoneNumber>> {
        Ok(self.active()?.directory.lookup(name))
    }

    /// Every contact in the active log, bucket order then chain order.
    pub fn print_all(&self) -> Result<Vec<ContactRecord>> {
        Ok(self.active()?.directory.list().cloned().collect())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write `<home>/<name>.txt`. Returns the path written.
    pub fn write_text(&self) -> Result<PathBuf> {
        self.write_with(&TextCodec)
    }

    /// Write `<home>/<name>.bin`. Returns the path written.
    pub fn write_binary(&self) -> Result<PathBuf> {
        self.write_with(&BinaryCodec)
    }

    fn write_with(&self, codec: &dyn DirectoryCodec) -> Result<PathBuf> {
        let active = self.active()?;
        persist::persist(codec, &active.directory, &active.home)
    }

    // =========================================================================
    // Command dispatch
    // =========================================================================

    /// Execute a command against the session.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), "execute");
        match cmd {
            Command::CreateLog { name } => {
                self.create_log(&name)?;
                Ok(Output::Created { name })
            }
            Command::LogName => Ok(Output::LogName(self.current_log_name()?.to_string())),
            Command::AddContact { name, phone, zip } => {
                self.add_contact(&name, phone, zip)?;
                Ok(Output::Added {
                    size: self.active()?.directory.len(),
                })
            }
            Command::Lookup { name } => {
                let phone = self.lookup(&name)?.map(PhoneNumber::get);
                Ok(Output::Phone { name, phone })
            }
            Command::Clear => {
                let name = self.current_log_name()?.to_string();
                let released = self.clear()?;
                Ok(Output::Cleared { name, released })
            }
            Command::PrintAll => Ok(Output::Contacts {
                name: self.current_log_name()?.to_string(),
                records: self.print_all()?,
            }),
            Command::WriteText => Ok(Output::Written {
                path: self.write_text()?,
            }),
            Command::WriteBinary => Ok(Output::Written {
                path: self.write_binary()?,
            }),
            Command::ReadText { path } => {
                self.read_text(&path)?;
                self.loaded(TextCodec.codec_id())
            }
            Command::ReadBinary { path } => {
                self.read_binary(&path)?;
                self.loaded(BinaryCodec.codec_id())
            }
            Command::Open { path } => {
                self.open(&path)?;
                self.loaded(codec_for_path(&path)?.codec_id())
            }
        }
    }

    fn loaded(&self, format: &str) -> Result<Output> {
        let directory = &self.active()?.directory;
        Ok(Output::Loaded {
            name: directory.name().to_string(),
            records: directory.len(),
            format: format.to_string(),
        })
    }
}
