//! Search-as-you-type suggestions.
//!
//! Every keystroke goes through [`LiveSearch::input`], which stamps it with a
//! sequence number and restarts the debounce timer. Only the newest stamp may
//! change the published [`LiveState`]; anything older is dropped when it
//! arrives.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

use crate::config::LiveSearchConfig;
use crate::providers::RecipeProvider;
use crate::suggestions::{partition_with_limit, SuggestionBucket};

/// What a suggestion dropdown should currently show
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LiveState {
    /// Nothing typed, or too little to search
    #[default]
    Idle,
    Loading {
        seq: u64,
        query: String,
    },
    Ready {
        seq: u64,
        query: String,
        suggestions: SuggestionBucket,
    },
    Failed {
        seq: u64,
        query: String,
        message: String,
    },
}

impl LiveState {
    pub fn seq(&self) -> Option<u64> {
        match self {
            LiveState::Idle => None,
            LiveState::Loading { seq, .. }
            | LiveState::Ready { seq, .. }
            | LiveState::Failed { seq, .. } => Some(*seq),
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            LiveState::Idle => None,
            LiveState::Loading { query, .. }
            | LiveState::Ready { query, .. }
            | LiveState::Failed { query, .. } => Some(query),
        }
    }

    pub fn suggestions(&self) -> Option<&SuggestionBucket> {
        match self {
            LiveState::Ready { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LiveState::Loading { .. })
    }
}

struct Shared {
    latest: AtomicU64,
    state: watch::Sender<LiveState>,
}

impl Shared {
    fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }

    /// Publish `next` only if `seq` is still the newest input
    fn apply(&self, seq: u64, next: LiveState) -> bool {
        self.state.send_if_modified(|current| {
            if !self.is_current(seq) {
                return false;
            }
            *current = next;
            true
        })
    }
}

#[derive(Default)]
struct DebounceTimer {
    last_scheduled: Option<Instant>,
    pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Debounced, sequence-stamped suggestion session over a [`RecipeProvider`].
///
/// Must be used from within a tokio runtime: each accepted input spawns the
/// task that waits out the debounce period and fetches.
pub struct LiveSearch {
    provider: Arc<dyn RecipeProvider>,
    settings: LiveSearchConfig,
    shared: Arc<Shared>,
    timer: Mutex<DebounceTimer>,
}

impl LiveSearch {
    pub fn new(provider: Arc<dyn RecipeProvider>, settings: LiveSearchConfig) -> Self {
        let (state, _) = watch::channel(LiveState::Idle);
        LiveSearch {
            provider,
            settings,
            shared: Arc::new(Shared {
                latest: AtomicU64::new(0),
                state,
            }),
            timer: Mutex::new(DebounceTimer::default()),
        }
    }

    /// Register the current contents of the search box.
    ///
    /// Returns the sequence number stamped on this input. Inputs shorter than
    /// `min_query_length` chars reset the state to [`LiveState::Idle`].
    pub fn input(&self, term: &str) -> u64 {
        // Stamped under the timer lock so the newest stamp always owns the pending task
        let mut timer = self.lock_timer();
        let seq = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;
        timer.cancel();

        let query = term.trim().to_string();
        if query.chars().count() < self.settings.min_query_length {
            timer.last_scheduled = None;
            self.shared.apply(seq, LiveState::Idle);
            return seq;
        }

        timer.last_scheduled = Some(Instant::now());

        let provider = Arc::clone(&self.provider);
        let shared = Arc::clone(&self.shared);
        let debounce = self.settings.debounce();
        let limit = self.settings.suggestion_limit;

        timer.pending = Some(tokio::spawn(async move {
            sleep(debounce).await;

            let loading = LiveState::Loading {
                seq,
                query: query.clone(),
            };
            if !shared.apply(seq, loading) {
                return;
            }

            debug!("Fetching suggestions for '{}' (#{})", query, seq);
            let next = match provider.search_by_name(&query).await {
                Ok(records) => LiveState::Ready {
                    seq,
                    suggestions: partition_with_limit(&records, &query, limit),
                    query,
                },
                Err(e) => {
                    warn!("Suggestion fetch for '{}' failed: {}", query, e);
                    LiveState::Failed {
                        seq,
                        query,
                        message: e.to_string(),
                    }
                }
            };

            if !shared.apply(seq, next) {
                debug!("Discarding stale suggestions (#{})", seq);
            }
        }));

        seq
    }

    /// Drop any scheduled or in-flight fetch and go back to idle
    pub fn cancel(&self) {
        let mut timer = self.lock_timer();
        let seq = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;
        timer.cancel();
        timer.last_scheduled = None;
        self.shared.apply(seq, LiveState::Idle);
    }

    pub fn state(&self) -> LiveState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LiveState> {
        self.shared.state.subscribe()
    }

    /// Sequence number of the most recent input
    pub fn latest_seq(&self) -> u64 {
        self.shared.latest.load(Ordering::SeqCst)
    }

    /// When the pending debounce timer was last (re)started
    pub fn last_scheduled(&self) -> Option<Instant> {
        self.lock_timer().last_scheduled
    }

    /// Whether a timer or fetch is still outstanding
    pub fn is_pending(&self) -> bool {
        self.lock_timer()
            .pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_timer(&self) -> MutexGuard<'_, DebounceTimer> {
        self.timer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for LiveSearch {
    fn drop(&mut self) {
        self.lock_timer().cancel();
    }
}
