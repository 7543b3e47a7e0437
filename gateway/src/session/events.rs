//! # Session Events
//!
//! Signal emitted by the gateway when the session ends. The hosting
//! application subscribes and reacts (typically by discarding page state and
//! navigating to its login surface); the gateway itself knows nothing about
//! routing.

use async_channel::{Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;

/// Session lifecycle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend answered 401. The session store has already been cleared.
    Invalidated { status: u16, path: String },
    /// `logout` finished its local cleanup.
    LoggedOut,
}

/// Fan-out of session events to any number of subscribers.
///
/// Cloning shares the subscriber list.
#[derive(Clone, Default)]
pub struct SessionEvents {
    subscribers: Arc<Mutex<Vec<Sender<SessionEvent>>>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Deliver `event` once to every live subscriber, pruning closed ones.
    ///
    /// Returns the number of subscribers that received it.
    pub(crate) fn emit(&self, event: SessionEvent) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.try_send(event.clone()).is_ok());
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl std::fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEvents")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
