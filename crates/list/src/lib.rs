//! Revalidating paginated-list controller
//!
//! Generic "fetch one page, render it, allow paging" state machine used by
//! every list screen. One instance manages one listing: it tracks the
//! current page index, the last fetched page, and a single-flight guard so
//! no two fetches for the same instance ever overlap. Callers force a full
//! re-fetch of page 0 by syncing a new integrity key after a mutation.
//!
//! Cross-instance invalidation is deliberately out of scope: two instances
//! over the same data are refreshed independently via their own keys.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use outreach_core::PageResponse;

/// Fetch seam supplied by the caller, closing over whatever filters apply.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch_page(&self, page_index: u32) -> anyhow::Result<PageResponse<T>>;
}

#[async_trait]
impl<T, F> PageFetcher<T> for F
where
    F: Fn(u32) -> BoxFuture<'static, anyhow::Result<PageResponse<T>>> + Send + Sync,
    T: Send + 'static,
{
    async fn fetch_page(&self, page_index: u32) -> anyhow::Result<PageResponse<T>> {
        (self)(page_index).await
    }
}

/// What the caller should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<T> {
    /// A fetch is in flight, or none has completed yet.
    Loading,
    /// The last completed fetch returned zero items.
    Empty,
    /// Items of the most recently completed fetch.
    Items(Vec<T>),
}

/// Whether a navigation request was acted on or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Fetched,
    /// Dropped: a fetch was in flight, no data was loaded, or the target
    /// page does not exist.
    Ignored,
}

struct ListState<T> {
    data: Option<PageResponse<T>>,
    current_page: u32,
    integrity_key: Option<i64>,
}

/// Pagination controller over a [`PageFetcher`].
pub struct RevalidatingList<T> {
    fetcher: Box<dyn PageFetcher<T>>,
    state: Mutex<ListState<T>>,
    fetching: AtomicBool,
}

impl<T> std::fmt::Debug for RevalidatingList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("RevalidatingList")
            .field("fetching", &self.fetching.load(Ordering::Acquire))
            .field("current_page", &state.current_page)
            .finish()
    }
}

impl<T: Clone + Send> RevalidatingList<T> {
    pub fn new(fetcher: impl PageFetcher<T> + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            state: Mutex::new(ListState { data: None, current_page: 0, integrity_key: None }),
            fetching: AtomicBool::new(false),
        }
    }

    /// Fetch page 0, replacing all state. Dropped when a fetch is already
    /// in flight.
    pub async fn refresh(&self) -> NavOutcome {
        if !self.begin_fetch() {
            return NavOutcome::Ignored;
        }
        self.fetch_into(0).await;
        NavOutcome::Fetched
    }

    /// Re-fetch page 0 when the caller's integrity key changed (or nothing
    /// was ever loaded). An unchanged key with data present is a no-op.
    pub async fn sync_integrity_key(&self, key: i64) -> NavOutcome {
        {
            let state = self.lock_state();
            if state.integrity_key == Some(key) && state.data.is_some() {
                return NavOutcome::Ignored;
            }
        }
        if !self.begin_fetch() {
            return NavOutcome::Ignored;
        }
        self.lock_state().integrity_key = Some(key);
        self.fetch_into(0).await;
        NavOutcome::Fetched
    }

    /// Navigate one page back. No-op while fetching, with no data, or at
    /// page 0.
    pub async fn previous(&self) -> NavOutcome {
        let target = {
            let state = self.lock_state();
            if state.data.is_none() || state.current_page == 0 {
                return NavOutcome::Ignored;
            }
            state.current_page - 1
        };
        self.switch_page(target).await
    }

    /// Navigate one page forward. No-op while fetching, with no data, or
    /// when the next index would reach the page count.
    pub async fn next(&self) -> NavOutcome {
        let target = {
            let state = self.lock_state();
            let Some(data) = &state.data else {
                return NavOutcome::Ignored;
            };
            if state.current_page + 1 >= data.page.total_pages {
                return NavOutcome::Ignored;
            }
            state.current_page + 1
        };
        self.switch_page(target).await
    }

    /// The content to display: always the result of the most recently
    /// completed fetch, never a stale page during a transition.
    pub fn view(&self) -> ListView<T> {
        if self.is_fetching() {
            return ListView::Loading;
        }
        let state = self.lock_state();
        match &state.data {
            None => ListView::Loading,
            Some(data) if data.is_empty() => ListView::Empty,
            Some(data) => ListView::Items(data.items.clone()),
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    pub fn current_page(&self) -> u32 {
        self.lock_state().current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.lock_state().data.as_ref().map(|data| data.page.total_pages)
    }

    /// Whether the "previous" control should be enabled.
    pub fn can_go_previous(&self) -> bool {
        if self.is_fetching() {
            return false;
        }
        let state = self.lock_state();
        state.data.is_some() && state.current_page > 0
    }

    /// Whether the "next" control should be enabled.
    pub fn can_go_next(&self) -> bool {
        if self.is_fetching() {
            return false;
        }
        let state = self.lock_state();
        state
            .data
            .as_ref()
            .is_some_and(|data| state.current_page + 1 < data.page.total_pages)
    }

    async fn switch_page(&self, target: u32) -> NavOutcome {
        if !self.begin_fetch() {
            return NavOutcome::Ignored;
        }
        self.fetch_into(target).await;
        NavOutcome::Fetched
    }

    /// Runs with the single-flight guard held: clears the displayed data,
    /// fetches the target page, applies the result, releases the guard.
    async fn fetch_into(&self, page: u32) {
        {
            let mut state = self.lock_state();
            state.current_page = page;
            state.data = None;
        }
        match self.fetcher.fetch_page(page).await {
            Ok(data) => self.lock_state().data = Some(data),
            Err(err) => tracing::warn!(page, error = %err, "page fetch failed"),
        }
        self.fetching.store(false, Ordering::Release);
    }

    fn begin_fetch(&self) -> bool {
        self.fetching.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ListState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
