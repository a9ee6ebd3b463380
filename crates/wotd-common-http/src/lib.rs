//! HTTP client for dictionary lookups and deployment checks.

pub mod client;
pub mod error;

pub use client::{HttpClient, HttpConfig};
pub use error::HttpError;
