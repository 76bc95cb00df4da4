//! Cancellable countdowns for auto-session pacing.
//!
//! A countdown waits on a condition variable rather than sleeping, so a
//! [`CancelToken::cancel`] from another thread ends it immediately instead of
//! after the current tick.

use alloc::sync::Arc;
use core::time::Duration;
use std::time::Instant;

use tracing::trace;

use crate::sync::{Condvar, Mutex};

/// How a countdown ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    /// The full delay elapsed.
    Elapsed,
    /// The token was cancelled before the delay elapsed.
    Cancelled,
}

struct Inner {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

/// A shareable cancellation flag that wakes sleeping countdowns.
///
/// Clones share the same flag. Once cancelled a token stays cancelled;
/// create a new token to start over.
#[derive(Clone)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl core::fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: Mutex::new(false),
                wake: Condvar::new(),
            }),
        }
    }

    /// Cancels the token and wakes every countdown waiting on it.
    pub fn cancel(&self) {
        *self.inner.cancelled.lock() = true;
        self.inner.wake.notify_all();
    }

    /// Returns whether the token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.inner.cancelled.lock()
    }

    /// Blocks for up to `timeout`. Returns `true` if cancelled meanwhile.
    ///
    /// A timeout too large to represent as a deadline waits for cancellation
    /// only.
    fn wait_for(&self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        let mut cancelled = self.inner.cancelled.lock();
        while !*cancelled {
            let Some(deadline) = deadline else {
                cancelled = self.inner.wake.wait(cancelled);
                continue;
            };
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            cancelled = self.inner.wake.wait_timeout(cancelled, deadline - now);
        }
        true
    }
}

/// Waits `seconds` one-second ticks, reporting the remaining count before
/// each tick.
///
/// See [`await_delay_with_tick`].
pub fn await_delay(seconds: u8, token: &CancelToken, on_tick: impl FnMut(u8)) -> DelayOutcome {
    await_delay_with_tick(seconds, Duration::from_secs(1), token, on_tick)
}

/// Waits `ticks` ticks of length `tick`, calling `on_tick(remaining)` before
/// each one (`ticks`, `ticks - 1`, ... `1`).
///
/// Returns [`DelayOutcome::Cancelled`] as soon as the token is cancelled,
/// including when it was cancelled before the call. A zero-tick delay
/// elapses immediately unless the token is already cancelled.
///
/// ```
/// use core::time::Duration;
/// use stackdrill::timer::{CancelToken, DelayOutcome, await_delay_with_tick};
///
/// let token = CancelToken::new();
/// let mut seen = Vec::new();
/// let outcome = await_delay_with_tick(3, Duration::from_millis(1), &token, |left| seen.push(left));
/// assert_eq!(outcome, DelayOutcome::Elapsed);
/// assert_eq!(seen, [3, 2, 1]);
/// ```
pub fn await_delay_with_tick(
    ticks: u8,
    tick: Duration,
    token: &CancelToken,
    mut on_tick: impl FnMut(u8),
) -> DelayOutcome {
    if token.is_cancelled() {
        return DelayOutcome::Cancelled;
    }

    for remaining in (1..=ticks).rev() {
        trace!(remaining, "countdown tick");
        on_tick(remaining);
        if token.wait_for(tick) {
            trace!(remaining, "countdown cancelled");
            return DelayOutcome::Cancelled;
        }
    }

    DelayOutcome::Elapsed
}
