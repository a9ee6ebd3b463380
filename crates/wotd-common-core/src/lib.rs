//! Word-of-the-day common core types and utilities.

pub mod date;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
