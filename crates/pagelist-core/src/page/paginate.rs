//! Module: page::paginate
//! Responsibility: serve one page from a source, optionally behind an in-memory prefix.
//! Does not own: source semantics, defaults, or result serialization.
//! Boundary: one count, then at most one bounded fetch; source failures pass through.

use crate::{
    error::PaginateError,
    obs::sink::{self, MetricsEvent, PaginateKind, Span},
    page::{PageRequest, PageWindow, PagedResult, PrefixSplit},
    source::{AsyncPageSource, PageSource},
};

/// Ceiling division used for page counts: `(total + size - 1) / size`
/// without the intermediate overflow. `size` must be non-zero.
#[must_use]
pub const fn ceil_div(total: u64, size: u64) -> u64 {
    total.div_ceil(size)
}

// ----------------------------------------------------------------------
// Blocking
// ----------------------------------------------------------------------

/// Serve page `request.pos` of `source`.
///
/// The count and the fetch are separate reads; a source that changes in
/// between can yield items that disagree with the reported totals.
pub fn paginate<T, S>(
    source: &S,
    request: PageRequest,
) -> Result<PagedResult<T>, PaginateError<S::Error>>
where
    S: PageSource<T> + ?Sized,
{
    let window = resolve_window(request)?;
    let mut span = Span::new(PaginateKind::Plain, false);

    let total = source.count().map_err(source_failed)?;
    sink::record(MetricsEvent::SourceCount);

    let fetched = source
        .fetch(window.offset(), window.size())
        .map_err(source_failed)?;
    let items = bound_fetched(fetched, window.size());

    Ok(finish(items, request, window, total, &mut span))
}

/// Serve page `request.pos` of the combined sequence `prefix ++ source`.
///
/// Prefix items always precede source items on a page. The source is only
/// read for the part of the window the prefix does not cover.
pub fn paginate_with_prefix<T, S>(
    source: &S,
    prefix: &[T],
    request: PageRequest,
) -> Result<PagedResult<T>, PaginateError<S::Error>>
where
    T: Clone,
    S: PageSource<T> + ?Sized,
{
    let window = resolve_window(request)?;
    let mut span = Span::new(PaginateKind::Prefix, false);

    let count = source.count().map_err(source_failed)?;
    sink::record(MetricsEvent::SourceCount);
    let total = combined_total(prefix.len(), count);

    let split = split_window(window, prefix.len());
    let mut items = prefix_items(prefix, &split);

    if split.needs_source() {
        let fetched = source
            .fetch(split.source_skip(), split.source_take())
            .map_err(source_failed)?;
        items.extend(bound_fetched(fetched, split.source_take()));
    } else {
        sink::record(MetricsEvent::FetchSkipped);
    }

    Ok(finish(items, request, window, total, &mut span))
}

// ----------------------------------------------------------------------
// Suspending
// ----------------------------------------------------------------------

/// Async twin of [`paginate`]. The count is awaited before the fetch starts.
pub async fn paginate_async<T, S>(
    source: &S,
    request: PageRequest,
) -> Result<PagedResult<T>, PaginateError<S::Error>>
where
    T: Send,
    S: AsyncPageSource<T> + ?Sized,
{
    let window = resolve_window(request)?;
    let mut span = Span::new(PaginateKind::Plain, true);

    let total = source.count().await.map_err(source_failed)?;
    sink::record(MetricsEvent::SourceCount);

    let fetched = source
        .fetch(window.offset(), window.size())
        .await
        .map_err(source_failed)?;
    let items = bound_fetched(fetched, window.size());

    Ok(finish(items, request, window, total, &mut span))
}

/// Async twin of [`paginate_with_prefix`].
pub async fn paginate_with_prefix_async<T, S>(
    source: &S,
    prefix: &[T],
    request: PageRequest,
) -> Result<PagedResult<T>, PaginateError<S::Error>>
where
    T: Clone + Send,
    S: AsyncPageSource<T> + ?Sized,
{
    let window = resolve_window(request)?;
    let mut span = Span::new(PaginateKind::Prefix, true);

    let count = source.count().await.map_err(source_failed)?;
    sink::record(MetricsEvent::SourceCount);
    let total = combined_total(prefix.len(), count);

    let split = split_window(window, prefix.len());
    let mut items = prefix_items(prefix, &split);

    if split.needs_source() {
        let fetched = source
            .fetch(split.source_skip(), split.source_take())
            .await
            .map_err(source_failed)?;
        items.extend(bound_fetched(fetched, split.source_take()));
    } else {
        sink::record(MetricsEvent::FetchSkipped);
    }

    Ok(finish(items, request, window, total, &mut span))
}

// ----------------------------------------------------------------------
// Shared phases
// ----------------------------------------------------------------------

fn resolve_window<E>(request: PageRequest) -> Result<PageWindow, PaginateError<E>> {
    request.window().map_err(|err| {
        sink::record(MetricsEvent::Rejected);
        tracing::warn!(
            pos = request.pos,
            size = request.size,
            error = %err,
            "page request rejected"
        );

        PaginateError::InvalidArgument(err)
    })
}

fn source_failed<E>(err: E) -> PaginateError<E> {
    sink::record(MetricsEvent::SourceFailed);

    PaginateError::Source(err)
}

const fn combined_total(prefix_len: usize, source_count: u64) -> u64 {
    (prefix_len as u64).saturating_add(source_count)
}

fn split_window(window: PageWindow, prefix_len: usize) -> PrefixSplit {
    let split = window.split_prefix(prefix_len);
    tracing::trace!(
        offset = window.offset(),
        prefix_len,
        prefix_take = split.prefix_take(),
        source_skip = split.source_skip(),
        source_take = split.source_take(),
        "page window split"
    );

    split
}

fn prefix_items<T: Clone>(prefix: &[T], split: &PrefixSplit) -> Vec<T> {
    let items = prefix[split.prefix_range()].to_vec();
    if !items.is_empty() {
        sink::record(MetricsEvent::PrefixServed {
            rows: items.len() as u64,
        });
    }

    items
}

// Hold the page bound even when a source overshoots its `take`.
fn bound_fetched<T>(mut fetched: Vec<T>, take: u64) -> Vec<T> {
    let take = usize::try_from(take).unwrap_or(usize::MAX);
    if fetched.len() > take {
        tracing::warn!(
            returned = fetched.len(),
            take,
            "source returned more items than requested; truncating"
        );
        fetched.truncate(take);
    }

    sink::record(MetricsEvent::SourceFetch {
        rows_fetched: fetched.len() as u64,
    });

    fetched
}

fn finish<T>(
    items: Vec<T>,
    request: PageRequest,
    window: PageWindow,
    total: u64,
    span: &mut Span,
) -> PagedResult<T> {
    let page_count = ceil_div(total, window.size());
    span.set_rows(items.len() as u64);

    tracing::debug!(
        pos = request.pos,
        size = window.size(),
        offset = window.offset(),
        total,
        page_count,
        rows = items.len(),
        "page served"
    );

    PagedResult::new(items, request.pos, page_count, total)
}

///
/// TESTS
///
