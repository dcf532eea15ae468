//! Module: page::result
//! Responsibility: the immutable page snapshot handed back to callers.
//! Does not own: window arithmetic or source access.
//! Boundary: plain data; serializes as `items`, `page`, `pages`, `total`.

use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// PagedResult
///
/// One page of items plus paging metadata, captured once per call.
/// `page_pos` echoes the request unchanged, including non-positive values.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PagedResult<T> {
    items: Vec<T>,

    #[serde(rename = "page")]
    page_pos: i64,

    #[serde(rename = "pages")]
    page_count: u64,

    #[serde(rename = "total")]
    total_item_count: u64,
}

impl<T> PagedResult<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, page_pos: i64, page_count: u64, total_item_count: u64) -> Self {
        Self {
            items,
            page_pos,
            page_count,
            total_item_count,
        }
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn page_pos(&self) -> i64 {
        self.page_pos
    }

    #[must_use]
    pub const fn page_count(&self) -> u64 {
        self.page_count
    }

    #[must_use]
    pub const fn total_item_count(&self) -> u64 {
        self.total_item_count
    }

    // Position as served: anything at or below 1 was the first page.
    const fn served_pos(&self) -> u64 {
        if self.page_pos <= 1 {
            1
        } else {
            self.page_pos.unsigned_abs()
        }
    }

    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.served_pos() == 1
    }

    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.served_pos() >= self.page_count
    }

    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.served_pos() > 1
    }

    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.served_pos() < self.page_count
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Consume this page and return `(items, page_pos, page_count, total_item_count)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, i64, u64, u64) {
        (
            self.items,
            self.page_pos,
            self.page_count,
            self.total_item_count,
        )
    }

    /// Convert items while keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page_pos: self.page_pos,
            page_count: self.page_count,
            total_item_count: self.total_item_count,
        }
    }
}

impl<T> IntoIterator for PagedResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

///
/// TESTS
///
