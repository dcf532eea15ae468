//! Module: page
//! Responsibility: page requests, window arithmetic, the prefix/source merge,
//! and the paged result snapshot.
//! Does not own: what a source stores or how it orders records.

mod paginate;
mod request;
mod result;
mod window;

#[cfg(test)]
mod tests;

pub use paginate::{
    ceil_div, paginate, paginate_async, paginate_with_prefix, paginate_with_prefix_async,
};
pub use request::{PageRequest, page_offset};
pub use result::PagedResult;
pub use window::{PageWindow, PrefixSplit};
