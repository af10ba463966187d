//! API endpoint modules organized by resource.
//!
//! Each module adds typed methods to [`ApiClient`](crate::ApiClient) for one
//! group of related endpoints.

pub mod boards;
pub mod cards;
pub mod lists;
pub mod members;
pub mod webhooks;
