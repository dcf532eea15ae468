use derive_more::Display;
use thiserror::Error as ThisError;

///
/// PageRequestError
/// Rejections raised while turning a page request into a window.
/// Always raised before the source is touched.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum PageRequestError {
    #[error("page size must be positive, got {size}")]
    NonPositivePageSize { size: i64 },

    #[error("page size {size} exceeds configured maximum {max}")]
    PageSizeAboveMax { size: i64, max: u32 },
}

///
/// PaginateError
///
/// Failure of one pagination call. Source failures are carried unmodified
/// (transparent display and `source()` chain) and can be taken back out with
/// [`PaginateError::into_source`].
///

#[derive(Debug, ThisError)]
pub enum PaginateError<E> {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] PageRequestError),

    #[error(transparent)]
    Source(E),
}

impl<E> PaginateError<E> {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidArgument(_) => ErrorClass::InvalidArgument,
            Self::Source(_) => ErrorClass::SourceUnavailable,
        }
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Borrow the source failure, if this error came from the source.
    #[must_use]
    pub const fn source_error(&self) -> Option<&E> {
        match self {
            Self::Source(err) => Some(err),
            Self::InvalidArgument(_) => None,
        }
    }

    /// Consume this error and return the source failure unchanged.
    #[must_use]
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Source(err) => Some(err),
            Self::InvalidArgument(_) => None,
        }
    }

    /// Map the source failure type, keeping argument rejections as they are.
    pub fn map_source<F>(self, f: impl FnOnce(E) -> F) -> PaginateError<F> {
        match self {
            Self::InvalidArgument(err) => PaginateError::InvalidArgument(err),
            Self::Source(err) => PaginateError::Source(f(err)),
        }
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("paging config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("default page size must be positive")]
    ZeroDefaultPageSize,

    #[error("default page size {default} exceeds maximum {max}")]
    DefaultAboveMax { default: u32, max: u32 },
}

///
/// ErrorClass
/// Coarse classification shared by every pagination failure.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    #[display("invalid_argument")]
    InvalidArgument,

    #[display("source_unavailable")]
    SourceUnavailable,
}

///
/// TESTS
///
