use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::UserId;

/// Last search keyword and last fetched page for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCursor {
    pub query: String,
    pub page: u32,
}

/// Per-session cursor store.
///
/// Cursors are never evicted; they live as long as the process.
#[derive(Debug, Default)]
pub struct SessionCursors {
    inner: Mutex<HashMap<UserId, SessionCursor>>,
}

impl SessionCursors {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user: UserId) -> Option<SessionCursor> {
        self.inner.lock().await.get(&user).cloned()
    }

    /// Create or overwrite the cursor for `user`, resetting the page to 1.
    pub async fn start(&self, user: UserId, query: &str) -> SessionCursor {
        let cursor = SessionCursor {
            query: query.to_string(),
            page: 1,
        };
        self.inner.lock().await.insert(user, cursor.clone());
        cursor
    }

    /// Increment the stored page and return the updated cursor.
    ///
    /// Returns `None` if the session has no cursor yet.
    pub async fn advance(&self, user: UserId) -> Option<SessionCursor> {
        let mut map = self.inner.lock().await;
        let cursor = map.get_mut(&user)?;
        cursor.page = cursor.page.saturating_add(1);
        Some(cursor.clone())
    }
}

/// Per-session async locks used to run one conversation step at a time.
#[derive(Default)]
pub struct SessionLocks {
    inner: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub async fn lock_session(&self, user: UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(user)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn start_resets_page_and_advance_increments() {
        let cursors = SessionCursors::new();
        let user = UserId(7);

        assert_eq!(cursors.advance(user).await, None);

        cursors.start(user, "rust").await;
        assert_eq!(cursors.advance(user).await.map(|c| c.page), Some(2));
        assert_eq!(cursors.advance(user).await.map(|c| c.page), Some(3));

        let fresh = cursors.start(user, "tokio").await;
        assert_eq!(
            fresh,
            SessionCursor {
                query: "tokio".to_string(),
                page: 1
            }
        );
        assert_eq!(cursors.get(user).await, Some(fresh));
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let cursors = SessionCursors::new();
        cursors.start(UserId(1), "a").await;
        cursors.start(UserId(2), "b").await;
        cursors.advance(UserId(1)).await;

        assert_eq!(cursors.get(UserId(1)).await.map(|c| c.page), Some(2));
        assert_eq!(cursors.get(UserId(2)).await.map(|c| c.page), Some(1));
    }

    #[tokio::test]
    async fn session_lock_serializes_same_user_only() {
        let locks = Arc::new(SessionLocks::default());
        let held = locks.lock_session(UserId(1)).await;

        // Another session is not blocked.
        let other = tokio::time::timeout(Duration::from_millis(50), locks.lock_session(UserId(2)))
            .await;
        assert!(other.is_ok());

        // Same session waits until the first guard is dropped.
        let same =
            tokio::time::timeout(Duration::from_millis(50), locks.lock_session(UserId(1))).await;
        assert!(same.is_err());

        drop(held);
        let same =
            tokio::time::timeout(Duration::from_millis(50), locks.lock_session(UserId(1))).await;
        assert!(same.is_ok());
    }
}
