//! Module: source
//! Responsibility: the ordered, counted, range-fetchable source contract.
//! Does not own: storage, filtering, or ordering of records.
//! Boundary: paginators call `count` then `fetch`; nothing else is assumed.

mod memory;

pub use memory::{SliceSource, VecSource};

use async_trait::async_trait;

///
/// PageSource
///
/// Blocking ordered source.
///
/// `fetch(skip, take)` returns at most `take` items starting at the 0-based
/// offset `skip`, in the same stable order on every call. A `skip` at or past
/// the end and a `take` of zero both yield an empty vector.
///
/// `count` and `fetch` are independent reads; nothing here requires them to
/// observe the same snapshot.
///

pub trait PageSource<T> {
    type Error;

    fn count(&self) -> Result<u64, Self::Error>;

    fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Self::Error>;
}

///
/// AsyncPageSource
///
/// Suspending counterpart of [`PageSource`] with the same contract, for
/// sources backed by I/O.
///

#[async_trait]
pub trait AsyncPageSource<T: Send>: Send + Sync {
    type Error: Send;

    async fn count(&self) -> Result<u64, Self::Error>;

    async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Self::Error>;
}
