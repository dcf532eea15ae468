//! Module: config
//! Responsibility: caller-owned paging defaults and limits.
//! Does not own: window arithmetic or source access.
//! Boundary: resolves loose caller input into a `PageRequest`.

use crate::{
    DEFAULT_PAGE_SIZE,
    error::{ConfigError, PageRequestError},
    page::PageRequest,
};
use serde::{Deserialize, Serialize};

///
/// PagingConfig
///
/// Explicit paging defaults. The paginator itself never reads this; callers
/// resolve requests through it so defaults stay visible at the call site.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PagingConfig {
    pub default_page_size: u32,
    pub max_page_size: Option<u32>,
}

impl PagingConfig {
    #[must_use]
    pub const fn new(default_page_size: u32, max_page_size: Option<u32>) -> Self {
        Self {
            default_page_size,
            max_page_size,
        }
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroDefaultPageSize);
        }

        if let Some(max) = self.max_page_size
            && self.default_page_size > max
        {
            return Err(ConfigError::DefaultAboveMax {
                default: self.default_page_size,
                max,
            });
        }

        Ok(())
    }

    /// Resolve a page request, falling back to the default page size.
    ///
    /// Page position is passed through untouched; only the size is checked.
    pub fn request(&self, pos: i64, size: Option<i64>) -> Result<PageRequest, PageRequestError> {
        let size = size.unwrap_or_else(|| i64::from(self.default_page_size));
        if size <= 0 {
            return Err(PageRequestError::NonPositivePageSize { size });
        }

        if let Some(max) = self.max_page_size
            && size > i64::from(max)
        {
            return Err(PageRequestError::PageSizeAboveMax { size, max });
        }

        Ok(PageRequest::new(pos, size))
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, None)
    }
}

///
/// TESTS
///
