//! Guards against stale results when fetch-and-pivot cycles overlap.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing request tokens and only lets the result
/// of the latest one through.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Relaxed) == token.0
    }

    /// Pass `value` through only if `token` is still the latest request.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            debug!(
                token = token.0,
                latest = self.latest.load(Ordering::Relaxed),
                "dropping stale result"
            );
            None
        }
    }
}
