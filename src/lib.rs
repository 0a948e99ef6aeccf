//! Listing search for a rental marketplace.
//!
//! Listings are loaded from a [`sources::ListingSource`] into an immutable
//! [`models::ListingSnapshot`], then queried with [`query::run`]: filter,
//! stable sort by price, and clamped pagination.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod sources;

pub use error::{QueryError, QueryResult};
pub use models::{Listing, ListingSnapshot, RawListing};
