//! Observability: pagination counters and the sink they flow through.
//!
//! Paging code only ever calls `sink::record`; the global counters sit
//! behind it and can be swapped per thread for tests.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::EventReport;
pub use sink::{
    MetricsEvent, MetricsSink, PaginateKind, metrics_report, metrics_reset_all,
    with_metrics_sink,
};
