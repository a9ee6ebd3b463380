//! Configuration types for the word-of-the-day site.
//!
//! Every setting comes from environment variables (optionally seeded from
//! `.env` files). [`ConfigLoader`] turns a snapshot of those variables into a
//! validated [`SiteConfig`].

pub mod env;
pub mod loader;
pub mod types;


pub use env::*;
pub use loader::*;
pub use types::*;
