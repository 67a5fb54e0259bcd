//! Outbound HTTP plumbing.
//!
//! `transport` defines the swappable transport seam used by the notifier;
//! `client` holds the shared reqwest client behind the default transport.

mod client;
mod transport;

pub use client::HTTP_CLIENT;
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
