#![allow(dead_code)]

//! Keystroke debouncer for suggestion lookups.
//!
//! Each `submit` supersedes the previous one: a pending timer or in-flight
//! lookup is aborted, and a stale result is never published. Subscribers see
//! the latest state through a `watch` channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::suggestion::Suggestion;
use crate::suggestions::client::SuggestionSource;

/// Quiet period after the last keystroke before a lookup is issued.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(250);

/// Latest suggestion state for one search box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionState {
    pub query: String,
    pub items: Vec<Suggestion>,
    pub loading: bool,
}

pub struct SuggestionDebouncer {
    source: Arc<dyn SuggestionSource>,
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    state: Arc<watch::Sender<SuggestionState>>,
}

impl SuggestionDebouncer {
    pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
        Self::with_delay(source, DEBOUNCE_DELAY)
    }

    pub fn with_delay(source: Arc<dyn SuggestionSource>, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(SuggestionState::default());
        Self {
            source,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            state: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> SuggestionState {
        self.state.borrow().clone()
    }

    /// Records a new query. Must be called from within a Tokio runtime.
    pub fn submit(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.abort_pending();

        if query.is_empty() {
            self.state.send_replace(SuggestionState::default());
            return;
        }

        let query = query.to_string();
        self.state.send_modify(|s| {
            s.query = query.clone();
            s.loading = true;
        });

        let source = Arc::clone(&self.source);
        let latest = Arc::clone(&self.generation);
        let state = Arc::clone(&self.state);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let items = match source.lookup(&query).await {
                Ok(items) => items,
                Err(e) => {
                    warn!("Suggestion lookup for {query:?} failed: {e}");
                    Vec::new()
                }
            };

            let published = state.send_if_modified(|s| {
                if latest.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *s = SuggestionState {
                    query,
                    items,
                    loading: false,
                };
                true
            });
            if !published {
                debug!("Dropped superseded suggestion result");
            }
        });

        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(handle);
        }
    }

    /// Drops any pending lookup without publishing its result.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.abort_pending();
        self.state.send_modify(|s| s.loading = false);
    }

    fn abort_pending(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for SuggestionDebouncer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::client::SuggestionError;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// Echoes the query back as a single suggestion after `latency`.
    struct EchoSource {
        calls: AtomicUsize,
        latency: Duration,
        fail: bool,
    }

    impl EchoSource {
        fn new(latency: Duration) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                latency,
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                latency: Duration::ZERO,
                fail: true,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SuggestionSource for EchoSource {
        async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, SuggestionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.latency).await;
            if self.fail {
                return Err(SuggestionError::Status(503));
            }
            Ok(vec![Suggestion {
                id: format!("echo-{query}"),
                kind: "Skill".to_string(),
                label: query.to_string(),
                sublabel: None,
                icon: None,
                href: None,
            }])
        }
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_issue_one_lookup() {
        let source = EchoSource::new(Duration::ZERO);
        let debouncer = SuggestionDebouncer::new(source.clone());

        debouncer.submit("j");
        wait(50).await;
        debouncer.submit("ja");
        wait(50).await;
        debouncer.submit("java");
        wait(300).await;

        assert_eq!(source.calls(), 1);
        let state = debouncer.current();
        assert_eq!(state.query, "java");
        assert_eq!(state.items[0].label, "java");
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_waits_for_the_delay() {
        let source = EchoSource::new(Duration::ZERO);
        let debouncer = SuggestionDebouncer::new(source.clone());

        debouncer.submit("rust");
        assert!(debouncer.current().loading);

        wait(200).await;
        assert_eq!(source.calls(), 0);

        wait(100).await;
        assert_eq!(source.calls(), 1);
        assert!(!debouncer.current().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_query_aborts_in_flight_lookup() {
        let source = EchoSource::new(Duration::from_secs(1));
        let debouncer = SuggestionDebouncer::new(source.clone());
        let mut rx = debouncer.subscribe();

        debouncer.submit("go");
        wait(300).await;
        assert_eq!(source.calls(), 1);

        debouncer.submit("golang");
        wait(2_000).await;

        assert_eq!(source.calls(), 2);
        let state = rx.borrow_and_update().clone();
        assert_eq!(state.query, "golang");
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].label, "golang");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_lookup() {
        let source = EchoSource::new(Duration::ZERO);
        let debouncer = SuggestionDebouncer::new(source.clone());

        debouncer.submit("python");
        wait(100).await;
        debouncer.cancel();
        wait(1_000).await;

        assert_eq!(source.calls(), 0);
        let state = debouncer.current();
        assert!(!state.loading);
        assert!(state.items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_clears_immediately() {
        let source = EchoSource::new(Duration::ZERO);
        let debouncer = SuggestionDebouncer::new(source.clone());

        debouncer.submit("java");
        wait(300).await;
        assert_eq!(debouncer.current().items.len(), 1);

        debouncer.submit("");
        assert_eq!(debouncer.current(), SuggestionState::default());
        wait(300).await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_lookup_publishes_empty_list() {
        let source = EchoSource::failing();
        let debouncer = SuggestionDebouncer::new(source.clone());

        debouncer.submit("kotlin");
        wait(300).await;

        let state = debouncer.current();
        assert_eq!(state.query, "kotlin");
        assert!(state.items.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_debouncer_aborts_work() {
        let source = EchoSource::new(Duration::ZERO);
        let debouncer = SuggestionDebouncer::new(source.clone());

        debouncer.submit("scala");
        drop(debouncer);
        wait(1_000).await;

        assert_eq!(source.calls(), 0);
    }
}
