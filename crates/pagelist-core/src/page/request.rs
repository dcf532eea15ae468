use crate::{error::PageRequestError, page::PageWindow};
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// PageRequest
///
/// One requested page: a 1-based position and a page size.
/// Positions at or below 1 all address the first page; the size must be
/// positive and is checked when the request is resolved into a window.
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PageRequest {
    pub pos: i64,
    pub size: i64,
}

impl PageRequest {
    #[must_use]
    pub const fn new(pos: i64, size: i64) -> Self {
        Self { pos, size }
    }

    /// First page at the given size.
    #[must_use]
    pub const fn first(size: i64) -> Self {
        Self::new(1, size)
    }

    /// Same size, next position.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self::new(self.pos.saturating_add(1), self.size)
    }

    /// Validate the size and resolve the absolute item window of this page.
    pub fn window(&self) -> Result<PageWindow, PageRequestError> {
        let size = u64::try_from(self.size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(PageRequestError::NonPositivePageSize { size: self.size })?;

        Ok(PageWindow::new(page_offset(self.pos, size), size))
    }
}

/// Zero-based offset of the first item on page `pos`.
///
/// Positions at or below 1 clamp to offset 0. Offsets that do not fit in
/// `u64` saturate, which lands the window past any real source.
#[must_use]
pub const fn page_offset(pos: i64, size: u64) -> u64 {
    if pos <= 1 {
        return 0;
    }

    (pos.unsigned_abs() - 1).saturating_mul(size)
}

///
/// TESTS
///
