//! # File Session Store
//!
//! Persistent key-value storage for the session, the native counterpart of
//! browser local storage. The file is a JSON object with two slots:
//!
//! ```text
//! {
//!   "access_token": "eyJhbGciOi...",
//!   "user": { "id": 3, "email": "...", ... }
//! }
//! ```
//!
//! Writes go to a uniquely named sibling temp file that is renamed into
//! place, so readers never observe a half-written pair and concurrent
//! writers never share a temp file.

use serde::{Deserialize, Serialize};
use shared::User;
use tempfile::NamedTempFile;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{Session, SessionStore};
use crate::core::error::{GatewayError, Result};

/// On-disk layout. Slots are optional so a damaged file is detected rather
/// than silently read as half a session.
#[derive(Serialize, Deserialize, Default)]
struct Slots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<User>,
}

/// Session store persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, e: impl std::fmt::Display) -> GatewayError {
        GatewayError::Session(format!("Failed to write {}: {}", self.path.display(), e))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GatewayError::Session(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let slots: Slots = serde_json::from_slice(&raw).map_err(|e| {
            GatewayError::Session(format!("Corrupt session file {}: {}", self.path.display(), e))
        })?;

        match (slots.access_token, slots.user) {
            (Some(access_token), Some(user)) => Ok(Some(Session { access_token, user })),
            (None, None) => Ok(None),
            _ => Err(GatewayError::Session(format!(
                "Session file {} holds only one of token/user",
                self.path.display()
            ))),
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| {
                    GatewayError::Session(format!("Failed to create {}: {}", parent.display(), e))
                })?;
                parent.to_path_buf()
            }
            None => PathBuf::from("."),
        };

        let slots = Slots {
            access_token: Some(session.access_token.clone()),
            user: Some(session.user.clone()),
        };
        let body = serde_json::to_vec_pretty(&slots)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_error(e))?;
        tmp.write_all(&body).map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path.display(), user_id = session.user.id, "Session persisted");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GatewayError::Session(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
