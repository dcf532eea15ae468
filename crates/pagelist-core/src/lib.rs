//! Core runtime for pagelist: page requests and windows, the prefix/source
//! merge, source traits, paged results, and the metrics surface.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod error;
pub mod obs;
pub mod page;
pub mod source;

///
/// CONSTANTS
///

/// Page size used when a caller resolves a request through a default
/// `PagingConfig` without naming a size.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

///
/// Prelude
///
/// Prelude contains only paging vocabulary.
/// No errors, metrics, or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        page::{
            PageRequest, PageWindow, PagedResult, paginate, paginate_async, paginate_with_prefix,
            paginate_with_prefix_async,
        },
        source::{AsyncPageSource, PageSource, SliceSource, VecSource},
    };
}
