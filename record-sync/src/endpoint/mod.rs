//! Endpoint Layer
//!
//! Data access abstraction over the remote record collection.
//! `RestEndpoint` talks HTTP; `InMemoryEndpoint` serves tests and local demos;
//! `UnavailableEndpoint` fails every call when configuration is broken.

mod traits;
mod query;
mod rest;
mod memory;
mod unavailable;

#[cfg(test)]
mod tests;

pub use traits::RecordEndpoint;
pub use query::{list_query_pairs, ListPage};
pub use rest::RestEndpoint;
pub use memory::{EndpointCall, InMemoryEndpoint, Operation};
pub use unavailable::UnavailableEndpoint;
