use crate::source::{AsyncPageSource, PageSource};
use async_trait::async_trait;
use std::convert::Infallible;

// Clone the `[skip, skip + take)` range of `items`, clamped to its length.
fn clone_range<T: Clone>(items: &[T], skip: u64, take: u64) -> Vec<T> {
    let start = usize::try_from(skip).unwrap_or(usize::MAX).min(items.len());
    let take = usize::try_from(take).unwrap_or(usize::MAX);

    items[start..].iter().take(take).cloned().collect()
}

///
/// SliceSource
/// Borrowed in-memory source; fetched items are cloned out of the slice.
///

#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'a, T>(pub &'a [T]);

impl<T: Clone> PageSource<T> for SliceSource<'_, T> {
    type Error = Infallible;

    fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.0.len() as u64)
    }

    fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Self::Error> {
        Ok(clone_range(self.0, skip, take))
    }
}

#[async_trait]
impl<'a, T: Clone + Send + Sync> AsyncPageSource<T> for SliceSource<'a, T> {
    type Error = Infallible;

    async fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.0.len() as u64)
    }

    async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Self::Error> {
        Ok(clone_range(self.0, skip, take))
    }
}

///
/// VecSource
/// Owned in-memory source.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VecSource<T>(pub Vec<T>);

impl<T> From<Vec<T>> for VecSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> FromIterator<T> for VecSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Clone> PageSource<T> for VecSource<T> {
    type Error = Infallible;

    fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.0.len() as u64)
    }

    fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Self::Error> {
        Ok(clone_range(&self.0, skip, take))
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> AsyncPageSource<T> for VecSource<T> {
    type Error = Infallible;

    async fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.0.len() as u64)
    }

    async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Self::Error> {
        Ok(clone_range(&self.0, skip, take))
    }
}

///
/// TESTS
///
