use super::{RecordingSource, SourceCall, SourceDown};
use crate::{
    error::{PageRequestError, PaginateError},
    obs::{MetricsEvent, MetricsSink, PaginateKind, with_metrics_sink},
    page::{PageRequest, PagedResult, paginate, paginate_with_prefix},
    source::{SliceSource, VecSource},
};
use std::{cell::RefCell, rc::Rc};

const PREFIX: [&str; 3] = ["A", "B", "C"];
const SOURCE: [&str; 3] = ["D", "E", "F"];

fn prefix_page(pos: i64, size: i64) -> PagedResult<&'static str> {
    paginate_with_prefix(&SliceSource(&SOURCE), &PREFIX, PageRequest::new(pos, size))
        .expect("in-memory pagination should succeed")
}

// ----------------------------------------------------------------------
// Prefix merge
// ----------------------------------------------------------------------

#[test]
fn prefix_merge_walks_across_the_boundary() {
    let pages: Vec<_> = (1..=3).map(|pos| prefix_page(pos, 2)).collect();

    assert_eq!(pages[0].items(), &["A", "B"]);
    assert_eq!(pages[1].items(), &["C", "D"]);
    assert_eq!(pages[2].items(), &["E", "F"]);

    for page in &pages {
        assert_eq!(page.total_item_count(), 6);
        assert_eq!(page.page_count(), 3);
    }
}

#[test]
fn window_inside_prefix_never_fetches() {
    let source = RecordingSource::new(SOURCE.to_vec());
    let page = paginate_with_prefix(&source, &PREFIX, PageRequest::new(1, 2))
        .expect("pagination should succeed");

    assert_eq!(page.items(), &["A", "B"]);
    assert_eq!(source.calls(), vec![SourceCall::Count]);
}

#[test]
fn straddling_window_fetches_only_the_remainder() {
    let source = RecordingSource::new(SOURCE.to_vec());
    let page = paginate_with_prefix(&source, &PREFIX, PageRequest::new(2, 2))
        .expect("pagination should succeed");

    assert_eq!(page.items(), &["C", "D"]);
    assert_eq!(source.fetches(), vec![(0, 1)]);
}

#[test]
fn window_inside_source_skips_past_prefix() {
    let source = RecordingSource::new(SOURCE.to_vec());
    let page = paginate_with_prefix(&source, &PREFIX, PageRequest::new(3, 2))
        .expect("pagination should succeed");

    assert_eq!(page.items(), &["E", "F"]);
    assert_eq!(source.fetches(), vec![(1, 2)]);
}

#[test]
fn partial_last_page_after_prefix() {
    let page = prefix_page(2, 4);

    assert_eq!(page.items(), &["E", "F"]);
    assert_eq!(page.page_count(), 2);
    assert!(page.is_last_page());
}

#[test]
fn empty_source_serves_prefix_only() {
    let empty: [&str; 0] = [];
    let source = SliceSource(&empty);

    let first = paginate_with_prefix(&source, &PREFIX, PageRequest::new(1, 2)).unwrap();
    let second = paginate_with_prefix(&source, &PREFIX, PageRequest::new(2, 2)).unwrap();
    let third = paginate_with_prefix(&source, &PREFIX, PageRequest::new(3, 2)).unwrap();

    assert_eq!(first.items(), &["A", "B"]);
    assert_eq!(second.items(), &["C"]);
    assert!(third.is_empty());
    assert_eq!(first.page_count(), 2);
    assert_eq!(first.total_item_count(), 3);
}

#[test]
fn empty_prefix_matches_plain_pagination() {
    let source = VecSource((1..=7).collect::<Vec<u32>>());

    for pos in -1..=5 {
        let request = PageRequest::new(pos, 3);
        let plain = paginate(&source, request).unwrap();
        let merged = paginate_with_prefix(&source, &[], request).unwrap();

        assert_eq!(plain, merged, "pos {pos}");
    }
}

#[test]
fn everything_empty_yields_zero_pages() {
    let page = paginate_with_prefix(&VecSource::<u8>::default(), &[], PageRequest::first(5))
        .expect("empty pagination should succeed");

    assert!(page.is_empty());
    assert_eq!(page.page_count(), 0);
    assert_eq!(page.total_item_count(), 0);
}

// ----------------------------------------------------------------------
// Position handling
// ----------------------------------------------------------------------

#[test]
fn non_positive_positions_serve_the_first_page() {
    let first = prefix_page(1, 2);

    for pos in [0, -1, -50, i64::MIN] {
        let page = prefix_page(pos, 2);

        assert_eq!(page.items(), first.items());
        assert_eq!(page.page_pos(), pos);
        assert_eq!(page.page_count(), first.page_count());
    }
}

#[test]
fn past_the_end_is_empty_with_full_counts() {
    let page = prefix_page(9, 2);

    assert!(page.is_empty());
    assert_eq!(page.page_pos(), 9);
    assert_eq!(page.page_count(), 3);
    assert_eq!(page.total_item_count(), 6);
}

#[test]
fn huge_position_saturates_to_empty_page() {
    let source = RecordingSource::new(SOURCE.to_vec());
    let page = paginate_with_prefix(&source, &PREFIX, PageRequest::new(i64::MAX, i64::MAX))
        .expect("saturated offset should still paginate");

    assert!(page.is_empty());
    assert_eq!(page.total_item_count(), 6);
    assert_eq!(page.page_count(), 1);
}

// ----------------------------------------------------------------------
// Errors
// ----------------------------------------------------------------------

#[test]
fn non_positive_size_is_rejected_before_touching_the_source() {
    let source = RecordingSource::new(SOURCE.to_vec());

    for size in [0, -1, i64::MIN] {
        let err = paginate_with_prefix(&source, &PREFIX, PageRequest::new(1, size))
            .expect_err("non-positive size must fail");

        assert!(matches!(
            err,
            PaginateError::InvalidArgument(PageRequestError::NonPositivePageSize { size: s })
                if s == size
        ));
    }

    assert!(source.calls().is_empty());
}

#[test]
fn count_failure_propagates_without_fetching() {
    let source = RecordingSource::new(SOURCE.to_vec()).failing_count();
    let err = paginate(&source, PageRequest::first(2)).expect_err("count failure must surface");

    assert_eq!(err.into_source(), Some(SourceDown("count")));
    assert_eq!(source.calls(), vec![SourceCall::Count]);
}

#[test]
fn fetch_failure_propagates_with_no_partial_result() {
    let source = RecordingSource::new(SOURCE.to_vec()).failing_fetch();
    let err = paginate_with_prefix(&source, &PREFIX, PageRequest::new(2, 2))
        .expect_err("fetch failure must surface");

    assert_eq!(err.to_string(), "source down during fetch");
}

#[test]
fn fetch_failure_is_irrelevant_when_prefix_covers_the_page() {
    let source = RecordingSource::new(SOURCE.to_vec()).failing_fetch();
    let page = paginate_with_prefix(&source, &PREFIX, PageRequest::new(1, 3))
        .expect("prefix-only page does not fetch");

    assert_eq!(page.items(), &["A", "B", "C"]);
}

#[test]
fn overshooting_source_is_truncated_to_page_size() {
    let source = RecordingSource::new((0..20).collect::<Vec<u8>>()).overshooting();

    let plain = paginate(&source, PageRequest::new(2, 4)).unwrap();
    let merged = paginate_with_prefix(&source, &[100, 101, 102], PageRequest::new(1, 4)).unwrap();

    assert_eq!(plain.items(), &[4, 5, 6, 7]);
    assert_eq!(merged.items(), &[100, 101, 102, 0]);
}

// ----------------------------------------------------------------------
// Metrics
// ----------------------------------------------------------------------

#[derive(Default)]
struct CollectingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl MetricsSink for CollectingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn prefix_only_page_records_skipped_fetch() {
    let sink = Rc::new(CollectingSink::default());

    with_metrics_sink(sink.clone(), || prefix_page(1, 2));

    assert_eq!(
        *sink.events.borrow(),
        vec![
            MetricsEvent::PaginateStart {
                kind: PaginateKind::Prefix,
                suspending: false,
            },
            MetricsEvent::SourceCount,
            MetricsEvent::PrefixServed { rows: 2 },
            MetricsEvent::FetchSkipped,
            MetricsEvent::PaginateFinish {
                kind: PaginateKind::Prefix,
                rows_returned: 2,
            },
        ]
    );
}

#[test]
fn rejected_request_records_only_rejection() {
    let sink = Rc::new(CollectingSink::default());

    let result = with_metrics_sink(sink.clone(), || {
        paginate(&SliceSource(&SOURCE), PageRequest::new(1, 0))
    });

    assert!(result.is_err());
    assert_eq!(*sink.events.borrow(), vec![MetricsEvent::Rejected]);
}

#[test]
fn failed_fetch_still_closes_span() {
    let sink = Rc::new(CollectingSink::default());
    let source = RecordingSource::new(SOURCE.to_vec()).failing_fetch();

    let result = with_metrics_sink(sink.clone(), || paginate(&source, PageRequest::first(2)));

    assert!(result.is_err());
    assert_eq!(
        sink.events.borrow().last(),
        Some(&MetricsEvent::PaginateFinish {
            kind: PaginateKind::Plain,
            rows_returned: 0,
        })
    );
    assert!(sink.events.borrow().contains(&MetricsEvent::SourceFailed));
}
