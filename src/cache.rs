use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

use chrono::{DateTime, TimeDelta, Utc};

use crate::trade::LedgerSnapshot;

/// Default freshness window for a cached parse.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

// ================================================================================================
// Clock
// ================================================================================================

/// Time source for freshness decisions, injectable for deterministic tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Test helper.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().expect("clock lock poisoned");
        *now += TimeDelta::from_std(by).unwrap_or(TimeDelta::zero());
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock poisoned")
    }
}

// ================================================================================================
// Result Cache
// ================================================================================================

/// Holds the most recent successful parse.
///
/// Freshness is a hint for the pipeline to decide whether to re-parse, not a
/// reason to discard data: once populated, the snapshot is retained past its
/// TTL as the stale-serve fallback until a newer parse replaces it. Readers
/// observe either the complete prior snapshot or the complete new one:
/// `put` is a single atomic replace, never a partial merge.
pub struct ResultCache {
    snapshot: RwLock<Option<Arc<LedgerSnapshot>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            snapshot: RwLock::new(None),
            ttl,
            clock,
        }
    }

    /// The current snapshot, fresh or stale.
    pub fn get(&self) -> Option<Arc<LedgerSnapshot>> {
        self.snapshot.read().expect("cache lock poisoned").clone()
    }

    /// Replaces the previous snapshot wholesale.
    pub fn put(&self, snapshot: LedgerSnapshot) {
        let mut slot = self.snapshot.write().expect("cache lock poisoned");
        *slot = Some(Arc::new(snapshot));
    }

    /// True while the held snapshot is younger than the TTL. An empty cache
    /// is never fresh.
    pub fn is_fresh(&self) -> bool {
        let Some(snapshot) = self.get() else {
            return false;
        };
        let ttl = TimeDelta::from_std(self.ttl).unwrap_or(TimeDelta::MAX);
        self.clock.now() - snapshot.captured_at < ttl
    }

    /// The cache's notion of now, used to stamp new snapshots so freshness
    /// math stays on one clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
