// Session Store - live page views keyed by session id
// Bounded like any other cache: the least recently used view is evicted first

use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    core::SessionId,
    error::{AppError, AppResult},
    views::PageView,
};

pub struct SessionStore {
    inner: Mutex<LruCache<SessionId, PageView>>,
}

impl SessionStore {
    pub fn new(capacity: usize) -> AppResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            AppError::Configuration("session capacity must be at least 1".into())
        })?;
        Ok(Self {
            inner: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Stores a fresh view under a new random id.
    pub async fn insert(&self, view: PageView) -> SessionId {
        let id = SessionId::new_random();
        let mut inner = self.inner.lock().await;
        if let Some((evicted, _)) = inner.push(id, view) {
            debug!("Evicted view session {}", evicted);
        }
        id
    }

    /// Runs `f` against the session's view under the store lock. Gestures on one
    /// session are therefore applied strictly one after another.
    pub async fn with_view<F, R>(&self, id: SessionId, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut PageView) -> AppResult<R>,
    {
        let mut inner = self.inner.lock().await;
        let view = inner.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        f(view)
    }

    /// A snapshot of the view for rendering.
    pub async fn get(&self, id: SessionId) -> AppResult<PageView> {
        let mut inner = self.inner.lock().await;
        inner.get(&id).cloned().ok_or_else(|| session_not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

fn session_not_found(id: SessionId) -> AppError {
    AppError::NotFound(format!("view session {} has expired or never existed", id))
}
