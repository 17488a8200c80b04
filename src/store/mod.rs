//! Local state cache and search filter.
//!
//! The cache mirrors the backend's employee collection as last observed by
//! this plugin. It is never the source of truth: it is replaced wholesale on
//! fetch/sort and patched in place after create, update and delete calls.
//!
//! # Modules
//!
//! - `cache`: The ordered, id-unique record cache
//! - `search`: Case-insensitive substring filtering and match ranges

pub mod cache;
pub mod search;

pub use cache::EmployeeCache;
pub use search::{filter, match_ranges, matches};
