mod merge;

use crate::source::PageSource;
use std::cell::RefCell;
use thiserror::Error as ThisError;

///
/// SourceCall
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SourceCall {
    Count,
    Fetch { skip: u64, take: u64 },
}

///
/// SourceDown
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("source down during {0}")]
struct SourceDown(&'static str);

///
/// RecordingSource
///
/// In-memory source that logs every call and can be told to fail one of
/// its operations.
///

struct RecordingSource<T> {
    items: Vec<T>,
    calls: RefCell<Vec<SourceCall>>,
    fail_count: bool,
    fail_fetch: bool,
    overshoot: bool,
}

impl<T: Clone> RecordingSource<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            calls: RefCell::new(Vec::new()),
            fail_count: false,
            fail_fetch: false,
            overshoot: false,
        }
    }

    fn failing_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    // Return everything from `skip` onward, ignoring `take`.
    fn overshooting(mut self) -> Self {
        self.overshoot = true;
        self
    }

    fn calls(&self) -> Vec<SourceCall> {
        self.calls.borrow().clone()
    }

    fn fetches(&self) -> Vec<(u64, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SourceCall::Fetch { skip, take } => Some((skip, take)),
                SourceCall::Count => None,
            })
            .collect()
    }
}

impl<T: Clone> PageSource<T> for RecordingSource<T> {
    type Error = SourceDown;

    fn count(&self) -> Result<u64, Self::Error> {
        self.calls.borrow_mut().push(SourceCall::Count);
        if self.fail_count {
            return Err(SourceDown("count"));
        }

        Ok(self.items.len() as u64)
    }

    fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Self::Error> {
        self.calls.borrow_mut().push(SourceCall::Fetch { skip, take });
        if self.fail_fetch {
            return Err(SourceDown("fetch"));
        }

        let start = usize::try_from(skip)
            .unwrap_or(usize::MAX)
            .min(self.items.len());
        let take = if self.overshoot {
            usize::MAX
        } else {
            usize::try_from(take).unwrap_or(usize::MAX)
        };

        Ok(self.items[start..].iter().take(take).cloned().collect())
    }
}
