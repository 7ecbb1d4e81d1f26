//! Trait abstractions for external boundaries.
//!
//! The only external boundary this application has beyond the terminal is
//! the network, so the only trait here is [`HttpClient`].

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
