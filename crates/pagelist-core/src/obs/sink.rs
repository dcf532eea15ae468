//! Metrics sink boundary.
//!
//! Paging logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics::{self, EVENT_STATE};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// PaginateKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaginateKind {
    Plain,
    Prefix,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    PaginateStart {
        kind: PaginateKind,
        suspending: bool,
    },
    PaginateFinish {
        kind: PaginateKind,
        rows_returned: u64,
    },
    Rejected,
    SourceCount,
    SourceFetch {
        rows_fetched: u64,
    },
    FetchSkipped,
    SourceFailed,
    PrefixServed {
        rows: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the process-wide counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        let s = &EVENT_STATE;

        match event {
            MetricsEvent::PaginateStart { kind, suspending } => {
                metrics::add(&s.paginate_calls, 1);
                if kind == PaginateKind::Prefix {
                    metrics::add(&s.prefix_calls, 1);
                }
                if suspending {
                    metrics::add(&s.async_calls, 1);
                }
            }
            MetricsEvent::PaginateFinish { rows_returned, .. } => {
                metrics::add(&s.rows_returned, rows_returned);
            }
            MetricsEvent::Rejected => metrics::add(&s.rejected, 1),
            MetricsEvent::SourceCount => metrics::add(&s.source_counts, 1),
            MetricsEvent::SourceFetch { rows_fetched } => {
                metrics::add(&s.source_fetches, 1);
                metrics::add(&s.rows_fetched, rows_fetched);
            }
            MetricsEvent::FetchSkipped => metrics::add(&s.fetches_skipped, 1),
            MetricsEvent::SourceFailed => metrics::add(&s.source_failures, 1),
            MetricsEvent::PrefixServed { rows } => metrics::add(&s.rows_from_prefix, rows),
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match override_sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the global counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all global counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
///
/// Only blocking paginators called from inside `f` are routed to `sink`;
/// async calls record wherever their future is polled.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

/// Span
/// RAII guard that emits start/finish events for one paginate call.
/// Finish is recorded on drop, so failed calls still close their span.

pub(crate) struct Span {
    kind: PaginateKind,
    rows: u64,
}

impl Span {
    #[must_use]
    pub(crate) fn new(kind: PaginateKind, suspending: bool) -> Self {
        record(MetricsEvent::PaginateStart { kind, suspending });

        Self { kind, rows: 0 }
    }

    pub(crate) const fn set_rows(&mut self, rows: u64) {
        self.rows = rows;
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        record(MetricsEvent::PaginateFinish {
            kind: self.kind,
            rows_returned: self.rows,
        });
    }
}

///
/// TESTS
///
