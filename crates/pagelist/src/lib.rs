//! ## Crate layout
//! - `core`: page requests, window arithmetic, the prefix merge, source
//!   traits, paged results, and metrics.
//! - `error`: stable public error taxonomy for service boundaries.
//!
//! The `prelude` module is what most call sites need.

pub use pagelist_core as core;

pub mod error;

pub use error::{Error, ErrorKind};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::PagingConfig,
        page::{
            PageRequest, PagedResult, paginate, paginate_async, paginate_with_prefix,
            paginate_with_prefix_async,
        },
        source::{AsyncPageSource as _, PageSource as _, SliceSource, VecSource},
    };
    pub use crate::error::Error;
}
