//! Aligni XML-over-HTTP API client

pub mod client;
pub mod error;
pub mod rate_limit;
pub mod resolver;
pub mod transport;
pub mod xml;

#[cfg(test)]
pub(crate) mod testing;

pub use client::AligniClient;
pub use error::{AligniError, Result};
pub use rate_limit::{FixedInterval, RateLimiter, Unlimited, RATE_LIMIT_SECS};
pub use resolver::{resolve_part_references, ReferenceResolver};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
pub use xml::{XmlError, XmlNode};
