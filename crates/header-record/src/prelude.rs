//! Convenience re-exports for common `header-record` types.
//!
//! ```
//! use header_record::prelude::*;
//! ```

pub use crate::config::RunConfig;
pub use crate::record::{Header, HeaderVersionOne};
pub use crate::render::{Format, emit, render};
