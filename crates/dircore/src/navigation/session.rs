//! Per-session current path storage.
//!
//! The navigator only talks to the [`SessionStore`] trait. Two stores ship:
//! - [`MemorySessionStore`]: sharded map, entries live for the process lifetime
//! - [`BoundedSessionStore`]: evicts by capacity and idle time

use dashmap::DashMap;
use moka::sync::Cache;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config;

/// Opaque identifier of one user's navigation session (the chat id in Telegram).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub i64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for session → current path.
///
/// Implementations must tolerate concurrent access from many sessions;
/// one session's write never touches another session's entry.
pub trait SessionStore: Send + Sync {
    fn get(&self, session: SessionId) -> Option<PathBuf>;

    fn set(&self, session: SessionId, path: PathBuf);

    fn remove(&self, session: SessionId) -> Option<PathBuf>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded in-memory store.
#[derive(Default)]
pub struct MemorySessionStore {
    paths: DashMap<SessionId, PathBuf>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session: SessionId) -> Option<PathBuf> {
        self.paths.get(&session).map(|entry| entry.value().clone())
    }

    fn set(&self, session: SessionId, path: PathBuf) {
        self.paths.insert(session, path);
    }

    fn remove(&self, session: SessionId) -> Option<PathBuf> {
        self.paths.remove(&session).map(|(_, path)| path)
    }

    fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Store that forgets sessions beyond `capacity` or after `idle` time.
///
/// An evicted session simply starts again from the root.
pub struct BoundedSessionStore {
    paths: Cache<SessionId, PathBuf>,
}

impl BoundedSessionStore {
    /// `capacity == 0` means no size limit.
    pub fn new(capacity: u64, idle: Option<Duration>) -> Self {
        let mut builder = Cache::builder();
        if capacity > 0 {
            builder = builder.max_capacity(capacity);
        }
        if let Some(idle) = idle {
            builder = builder.time_to_idle(idle);
        }
        Self { paths: builder.build() }
    }
}

impl SessionStore for BoundedSessionStore {
    fn get(&self, session: SessionId) -> Option<PathBuf> {
        self.paths.get(&session)
    }

    fn set(&self, session: SessionId, path: PathBuf) {
        self.paths.insert(session, path);
    }

    fn remove(&self, session: SessionId) -> Option<PathBuf> {
        self.paths.remove(&session)
    }

    fn len(&self) -> usize {
        self.paths.run_pending_tasks();
        usize::try_from(self.paths.entry_count()).unwrap_or(usize::MAX)
    }
}

/// Picks the store from SESSION_CAPACITY / SESSION_IDLE_SECS.
pub fn store_from_config() -> Arc<dyn SessionStore> {
    if config::session::is_bounded() {
        log::info!(
            "Using bounded session store (capacity: {}, idle: {:?})",
            *config::session::CAPACITY,
            config::session::idle_timeout()
        );
        Arc::new(BoundedSessionStore::new(
            *config::session::CAPACITY,
            config::session::idle_timeout(),
        ))
    } else {
        log::info!("Using in-memory session store (unbounded)");
        Arc::new(MemorySessionStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemorySessionStore::new();
        assert!(store.get(SessionId(1)).is_none());

        store.set(SessionId(1), PathBuf::from("root/A"));
        assert_eq!(store.get(SessionId(1)), Some(PathBuf::from("root/A")));

        store.set(SessionId(1), PathBuf::from("root"));
        assert_eq!(store.get(SessionId(1)), Some(PathBuf::from("root")));

        assert_eq!(store.remove(SessionId(1)), Some(PathBuf::from("root")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_sessions_are_independent_under_concurrency() {
        let store = Arc::new(MemorySessionStore::new());
        let handles: Vec<_> = (0..8)
            .map(|id| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for step in 0..100 {
                        store.set(SessionId(id), PathBuf::from(format!("root/{}/{}", id, step)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 8);
        for id in 0..8 {
            assert_eq!(store.get(SessionId(id)), Some(PathBuf::from(format!("root/{}/99", id))));
        }
    }

    #[test]
    fn test_bounded_store_get_set_remove() {
        let store = BoundedSessionStore::new(10, None);
        store.set(SessionId(7), PathBuf::from("root/B"));
        assert_eq!(store.get(SessionId(7)), Some(PathBuf::from("root/B")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove(SessionId(7)), Some(PathBuf::from("root/B")));
        assert!(store.get(SessionId(7)).is_none());
    }

    #[test]
    fn test_bounded_store_respects_capacity() {
        let store = BoundedSessionStore::new(2, None);
        for id in 0..50 {
            store.set(SessionId(id), PathBuf::from("root"));
        }
        assert!(store.len() <= 2, "store kept {} sessions", store.len());
    }

    #[test]
    fn test_session_id_display() {
        assert_eq!(SessionId(-100123).to_string(), "-100123");
    }
}
