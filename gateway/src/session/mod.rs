//! # Session Storage
//!
//! The persisted credential pair (bearer token + current user) and the
//! storage abstraction the gateway reads it from.
//!
//! ```text
//! session/
//! ├── mod.rs      - Session, SessionStore trait
//! ├── memory.rs   - MemorySessionStore (tests, embedded hosts)
//! ├── file.rs     - FileSessionStore (persistent JSON file)
//! └── events.rs   - SessionEvent fan-out (invalidation signal)
//! ```
//!
//! ## Invariant
//!
//! The token and the user record are either both present or both absent.
//! Stores only expose whole-pair writes (`save`) and whole-pair removal
//! (`clear`), so no caller can leave half a session behind.
//!
//! ## Substitution
//!
//! The gateway holds an `Arc<dyn SessionStore>`. Production hosts use
//! [`FileSessionStore`]; tests use [`MemorySessionStore`].

pub mod events;
pub mod file;
pub mod memory;

pub use events::{SessionEvent, SessionEvents};
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use serde::{Deserialize, Serialize};
use shared::{AuthResponse, User};

use crate::core::error::Result;

/// The persisted credential pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self {
            access_token: auth.access_token,
            user: auth.user,
        }
    }
}

/// Storage for the session pair.
///
/// Implementations must be safe to call from many in-flight requests at once:
/// every outbound request reads the token, while login persistence, logout and
/// the 401 teardown write it.
pub trait SessionStore: Send + Sync {
    /// Read the whole pair, `None` when signed out.
    fn load(&self) -> Result<Option<Session>>;

    /// Persist the pair, replacing any previous one.
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove both slots. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;

    fn token(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|s| s.access_token))
    }

    fn user(&self) -> Result<Option<User>> {
        Ok(self.load()?.map(|s| s.user))
    }
}

#[cfg(test)]
pub(crate) fn test_session(token: &str) -> Session {
    Session {
        access_token: token.to_string(),
        user: User {
            id: 42,
            email: "analyst@saude.gov.br".to_string(),
            name: "Analyst".to_string(),
            institution: Some("SES-PE".to_string()),
            role: "analyst".to_string(),
            is_active: true,
            created_at: Some("2024-01-01T00:00:00".to_string()),
        },
    }
}
