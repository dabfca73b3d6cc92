//! Gateway access layer for the outreach console
//!
//! The sole channel through which the client talks to the backend: one typed
//! async operation per backend capability, bearer-token attachment, uniform
//! error mapping, and `{ "data": ... }` envelope unwrapping. Two
//! implementations exist — the live [`HttpGateway`] and the null-object
//! [`UnimplementedGateway`] — selected explicitly at construction.

mod envelope;
mod error;
mod http;
mod query;
mod traits;
mod unimplemented;

pub use envelope::unwrap_envelope;
pub use error::{GatewayError, GatewayResult};
pub use http::HttpGateway;
pub use query::QueryParams;
pub use traits::*;
pub use unimplemented::UnimplementedGateway;

#[cfg(test)]
mod http_tests;
