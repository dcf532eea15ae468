use candid::CandidType;
use pagelist_core::error::{ConfigError, ErrorClass, PageRequestError, PaginateError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy.
/// Source failures keep only their rendered message here; callers that need
/// the typed source error should match on `PaginateError` from `core` instead.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{kind}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl<E: Display> From<PaginateError<E>> for Error {
    fn from(err: PaginateError<E>) -> Self {
        let kind = match err.class() {
            ErrorClass::InvalidArgument => ErrorKind::InvalidArgument,
            ErrorClass::SourceUnavailable => ErrorKind::SourceUnavailable,
        };

        Self::new(kind, err.to_string())
    }
}

impl From<PageRequestError> for Error {
    fn from(err: PageRequestError) -> Self {
        Self::new(ErrorKind::InvalidArgument, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and service interfaces.
///

#[derive(
    CandidType, Clone, Copy, Debug, Deserialize, derive_more::Display, Eq, PartialEq, Serialize,
)]
pub enum ErrorKind {
    /// The page request is malformed (non-positive or oversized page size).
    #[display("invalid_argument")]
    InvalidArgument,

    /// The underlying source failed to count or fetch.
    #[display("source_unavailable")]
    SourceUnavailable,

    /// Paging configuration could not be loaded.
    #[display("config")]
    Config,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, ThisError)]
    #[error("connection reset")]
    struct Reset;

    #[test]
    fn source_failure_maps_to_source_unavailable() {
        let err: Error = PaginateError::Source(Reset).into();

        assert_eq!(err.kind, ErrorKind::SourceUnavailable);
        assert_eq!(err.message, "connection reset");
        assert_eq!(err.to_string(), "source_unavailable: connection reset");
    }

    #[test]
    fn rejection_maps_to_invalid_argument() {
        let err: Error =
            PaginateError::<Reset>::from(PageRequestError::NonPositivePageSize { size: -1 })
                .into();

        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn config_error_maps_to_config() {
        let err: Error = ConfigError::ZeroDefaultPageSize.into();

        assert_eq!(err.kind, ErrorKind::Config);
    }
}
