use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

///
/// EventState
/// Process-wide pagination counters. Relaxed atomics; values are advisory.
///

pub(crate) struct EventState {
    pub(crate) paginate_calls: AtomicU64,
    pub(crate) prefix_calls: AtomicU64,
    pub(crate) async_calls: AtomicU64,
    pub(crate) rejected: AtomicU64,
    pub(crate) source_counts: AtomicU64,
    pub(crate) source_fetches: AtomicU64,
    pub(crate) fetches_skipped: AtomicU64,
    pub(crate) source_failures: AtomicU64,
    pub(crate) rows_fetched: AtomicU64,
    pub(crate) rows_from_prefix: AtomicU64,
    pub(crate) rows_returned: AtomicU64,
}

impl EventState {
    const fn new() -> Self {
        Self {
            paginate_calls: AtomicU64::new(0),
            prefix_calls: AtomicU64::new(0),
            async_calls: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            source_counts: AtomicU64::new(0),
            source_fetches: AtomicU64::new(0),
            fetches_skipped: AtomicU64::new(0),
            source_failures: AtomicU64::new(0),
            rows_fetched: AtomicU64::new(0),
            rows_from_prefix: AtomicU64::new(0),
            rows_returned: AtomicU64::new(0),
        }
    }

    fn counters(&self) -> [&AtomicU64; 11] {
        [
            &self.paginate_calls,
            &self.prefix_calls,
            &self.async_calls,
            &self.rejected,
            &self.source_counts,
            &self.source_fetches,
            &self.fetches_skipped,
            &self.source_failures,
            &self.rows_fetched,
            &self.rows_from_prefix,
            &self.rows_returned,
        ]
    }
}

pub(crate) static EVENT_STATE: EventState = EventState::new();

pub(crate) fn add(counter: &AtomicU64, delta: u64) {
    counter.fetch_add(delta, Ordering::Relaxed);
}

///
/// EventReport
/// Point-in-time snapshot of the global counters.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub paginate_calls: u64,
    pub prefix_calls: u64,
    pub async_calls: u64,
    pub rejected: u64,
    pub source_counts: u64,
    pub source_fetches: u64,
    pub fetches_skipped: u64,
    pub source_failures: u64,
    pub rows_fetched: u64,
    pub rows_from_prefix: u64,
    pub rows_returned: u64,
}

/// Snapshot the global counters.
#[must_use]
pub(crate) fn report() -> EventReport {
    let s = &EVENT_STATE;
    let load = |counter: &AtomicU64| counter.load(Ordering::Relaxed);

    EventReport {
        paginate_calls: load(&s.paginate_calls),
        prefix_calls: load(&s.prefix_calls),
        async_calls: load(&s.async_calls),
        rejected: load(&s.rejected),
        source_counts: load(&s.source_counts),
        source_fetches: load(&s.source_fetches),
        fetches_skipped: load(&s.fetches_skipped),
        source_failures: load(&s.source_failures),
        rows_fetched: load(&s.rows_fetched),
        rows_from_prefix: load(&s.rows_from_prefix),
        rows_returned: load(&s.rows_returned),
    }
}

/// Reset all global counters.
pub(crate) fn reset_all() {
    for counter in EVENT_STATE.counters() {
        counter.store(0, Ordering::Relaxed);
    }
}
