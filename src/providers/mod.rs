//! Provider seams for externally computed state.
//!
//! # Responsibilities
//! - Define the read-only interfaces the diagnostic checks consume
//! - Expose the vendor rate-limit constant
//! - Provide a process-local state store for daemons and tests
//!
//! # Design Decisions
//! - Checks never own state; they read through these traits
//! - Counter reset timing (daily rollover) is the caller's concern
//! - Shared state uses relaxed atomics; checks tolerate slightly stale reads

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Source of the current-period purge counter.
pub trait PurgeCounter: Send + Sync {
    /// Number of tag purges performed so far in the current day.
    fn tag_purge_daily_count(&self) -> u64;
}

/// Source of the vendor's purge rate limits.
pub trait RateLimits: Send + Sync {
    /// Maximum tag purges permitted per day.
    fn tag_purge_daily_limit(&self) -> u32;
}

/// Source of the stored credential-validity flag.
pub trait CredentialState: Send + Sync {
    /// Whether the configured API credentials were last verified as valid.
    fn credentials_valid(&self) -> bool;
}

/// Rate limits published by Cloudflare for tag purging.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudflareLimits;

impl CloudflareLimits {
    /// Cloudflare permits 200 tag purges per day.
    pub const TAG_PURGE_DAILY_LIMIT: u32 = 200;
}

impl RateLimits for CloudflareLimits {
    fn tag_purge_daily_limit(&self) -> u32 {
        Self::TAG_PURGE_DAILY_LIMIT
    }
}

/// A fixed rate limit, for configurations that override the vendor constant.
#[derive(Debug, Clone, Copy)]
pub struct FixedLimits {
    limit: u32,
}

impl FixedLimits {
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl RateLimits for FixedLimits {
    fn tag_purge_daily_limit(&self) -> u32 {
        self.limit
    }
}

/// Process-local purge state.
///
/// The embedding application records purges and credential verifications
/// here; the checks only ever read. An external scheduler calls
/// [`reset_daily_counts`](InMemoryState::reset_daily_counts) at rollover.
#[derive(Debug, Default)]
pub struct InMemoryState {
    tag_purges_today: AtomicU64,
    credentials_valid: AtomicBool,
}

impl InMemoryState {
    /// Create an empty state: zero purges, credentials not yet verified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tag purge and return the new daily count.
    pub fn record_tag_purge(&self) -> u64 {
        self.tag_purges_today.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Reset the daily counters at period rollover.
    pub fn reset_daily_counts(&self) {
        self.tag_purges_today.store(0, Ordering::Relaxed);
    }

    /// Store the outcome of the latest credential verification.
    pub fn set_credentials_valid(&self, valid: bool) {
        self.credentials_valid.store(valid, Ordering::Relaxed);
    }
}

impl PurgeCounter for InMemoryState {
    fn tag_purge_daily_count(&self) -> u64 {
        self.tag_purges_today.load(Ordering::Relaxed)
    }
}

impl CredentialState for InMemoryState {
    fn credentials_valid(&self) -> bool {
        self.credentials_valid.load(Ordering::Relaxed)
    }
}

/// The full set of collaborators the built-in checks read from.
#[derive(Clone)]
pub struct ProviderSet {
    pub counter: Arc<dyn PurgeCounter>,
    pub limits: Arc<dyn RateLimits>,
    pub credentials: Arc<dyn CredentialState>,
}

impl ProviderSet {
    /// Wire every seam to a single in-memory store with vendor limits.
    pub fn in_memory(state: Arc<InMemoryState>) -> Self {
        Self {
            counter: state.clone(),
            limits: Arc::new(CloudflareLimits),
            credentials: state,
        }
    }
}
