//! Session handling: the record of the currently signed-in user.
//!
//! The browser demo this core descends from kept the user under a single
//! local-storage key. Here the storage is a [`SessionStore`] capability so
//! any key-value backing (a JSON file, an in-memory map) satisfies it.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{QuickdeskError, Result};

/// File name for the persisted session, under the platform data dir.
const SESSION_FILE: &str = "session.json";

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Storage capability for the session record.
///
/// `load` returns `Ok(None)` when no session has been saved; errors are
/// reserved for IO and serialization failures.
pub trait SessionStore {
    fn save(&self, user: &User) -> Result<()>;
    fn load(&self) -> Result<Option<User>>;
    fn clear(&self) -> Result<()>;
}

/// Session persisted as a JSON file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStore { path: path.into() }
    }

    /// The default session file location under the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "quickdesk")
            .ok_or_else(|| QuickdeskError::Session("no home directory available".to_string()))?;
        Ok(dirs.data_dir().join(SESSION_FILE))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let user: User = serde_json::from_str(&content)?;
        Ok(Some(user))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-process session storage for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: RefCell<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        MemorySessionStore::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, user: &User) -> Result<()> {
        *self.user.borrow_mut() = Some(user.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<User>> {
        Ok(self.user.borrow().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.user.borrow_mut() = None;
        Ok(())
    }
}

/// The current-user record, backed by a [`SessionStore`].
///
/// Constructed at application start and passed by reference to whichever
/// component needs it; there are no hidden statics.
pub struct Session {
    store: Box<dyn SessionStore>,
    current: Option<User>,
}

impl Session {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Session {
            store,
            current: None,
        }
    }

    /// Load any persisted user into the session.
    pub fn restore(&mut self) -> Result<()> {
        self.current = self.store.load()?;
        Ok(())
    }

    /// Sign a user in and persist the record.
    pub fn sign_in(&mut self, user: User) -> Result<()> {
        self.store.save(&user)?;
        self.current = Some(user);
        Ok(())
    }

    /// Sign out and clear the persisted record.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.clear()?;
        self.current = None;
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
