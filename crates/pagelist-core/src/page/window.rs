use std::ops::Range;

///
/// PageWindow
///
/// Absolute item window `[offset, offset + size)` of one page over the
/// combined (prefix ++ source) sequence. `size` is always non-zero.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PageWindow {
    offset: u64,
    size: u64,
}

impl PageWindow {
    pub(crate) const fn new(offset: u64, size: u64) -> Self {
        Self { offset, size }
    }

    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Exclusive end of the window, saturating at `u64::MAX`.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }

    /// Split this window between an in-memory prefix of `prefix_len` items
    /// and the source that logically follows it.
    #[must_use]
    pub fn split_prefix(&self, prefix_len: usize) -> PrefixSplit {
        let prefix_len = u64::try_from(prefix_len).unwrap_or(u64::MAX);
        let prefix_take = prefix_len.saturating_sub(self.offset).min(self.size);

        // prefix_take > 0 implies offset < prefix_len, so both bounds index the prefix
        let prefix = if prefix_take == 0 {
            0..0
        } else {
            let start = usize::try_from(self.offset).unwrap_or(usize::MAX);
            let take = usize::try_from(prefix_take).unwrap_or(usize::MAX);
            start..start.saturating_add(take)
        };

        PrefixSplit {
            prefix,
            source_skip: self.offset.saturating_sub(prefix_len),
            source_take: self.size - prefix_take,
        }
    }
}

///
/// PrefixSplit
///
/// How one page window is served: a slice of the prefix first, then at most
/// `source_take` items read from the source starting at `source_skip`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrefixSplit {
    prefix: Range<usize>,
    source_skip: u64,
    source_take: u64,
}

impl PrefixSplit {
    /// Index range of the prefix items on this page (empty when none).
    #[must_use]
    pub fn prefix_range(&self) -> Range<usize> {
        self.prefix.clone()
    }

    #[must_use]
    pub const fn prefix_take(&self) -> usize {
        self.prefix.end - self.prefix.start
    }

    #[must_use]
    pub const fn source_skip(&self) -> u64 {
        self.source_skip
    }

    #[must_use]
    pub const fn source_take(&self) -> u64 {
        self.source_take
    }

    /// Whether any room remains on the page for source items.
    #[must_use]
    pub const fn needs_source(&self) -> bool {
        self.source_take > 0
    }
}

///
/// TESTS
///
