//! In-memory session store.

use parking_lot::RwLock;

use super::{Session, SessionStore};
use crate::core::error::Result;

/// Session store backed by process memory. Lost on exit.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a session.
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.slot.read().clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.slot.write() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.slot.write().take();
        Ok(())
    }
}
