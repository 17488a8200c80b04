//! Infrastructure layer for sandbox environment concerns.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
