//! In-memory session store.
//!
//! Each session lives behind its own [`SessionHandle`]: a writer gate that
//! serializes mutating operations on that session, and a read/write lock over
//! the state so snapshots never observe a half-applied guess. The map lock is
//! only held for lookups and inserts, never across an `.await`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::{Mutex, MutexGuard, RwLock as AsyncRwLock, RwLockReadGuard, RwLockWriteGuard};

use super::types::Session;

pub struct SessionHandle {
    writer: Mutex<()>,
    state: AsyncRwLock<Session>,
}

impl SessionHandle {
    fn new(session: Session) -> Self {
        Self {
            writer: Mutex::new(()),
            state: AsyncRwLock::new(session),
        }
    }

    /// Exclusive right to mutate this session. Held for the whole of a guess,
    /// give-up, or delete, including any outbound embedding call.
    pub async fn begin_write(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().await
    }

    /// Short write access for committing a change. Take [`begin_write`] first.
    ///
    /// [`begin_write`]: Self::begin_write
    pub async fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().await
    }
}

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: Session) {
        let id = session.id.clone();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(SessionHandle::new(session)));
    }

    pub fn get(&self, id: &str) -> Option<Arc<SessionHandle>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn remove(&self, id: &str) -> Option<Arc<SessionHandle>> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
