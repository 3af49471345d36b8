//! Bounds on deep directory walks.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Default maximum directory depth below a root.
pub const DEFAULT_MAX_DEPTH: usize = 12;

/// Default maximum number of directories one resolve call may visit.
pub const DEFAULT_MAX_VISITED: usize = 50_000;

/// Limits shared by every deep walk of one resolve call.
///
/// The depth limit applies to each walk from its root. The visited-directory
/// count, the deadline and the cancellation token are shared: every deep scan
/// of every root draws from the same allowance, and clones of a budget share
/// it too. Build a fresh budget per call.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    max_depth: usize,
    max_visited: usize,
    visited: Arc<AtomicUsize>,
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITED)
    }
}

impl SearchBudget {
    /// A budget with explicit depth and visited-directory limits.
    pub fn new(max_depth: usize, max_visited: usize) -> Self {
        Self {
            max_depth,
            max_visited,
            visited: Arc::new(AtomicUsize::new(0)),
            deadline: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Stop walking once `timeout` has elapsed from now.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Stop walking once `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub const fn max_visited(&self) -> usize {
        self.max_visited
    }

    /// Directories visited so far under this budget.
    pub fn visited(&self) -> usize {
        self.visited.load(Ordering::Relaxed)
    }

    /// Claim one directory visit. `false` once the allowance is used up.
    pub fn try_visit(&self) -> bool {
        self.visited
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                (n < self.max_visited).then_some(n + 1)
            })
            .is_ok()
    }

    /// Token that aborts walks under this budget when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Whether the deadline passed or the call was cancelled.
    pub fn is_expired(&self) -> bool {
        self.cancel.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
