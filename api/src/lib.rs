//! Typed REST client for the campus back-office API.
//!
//! This crate owns the request/response contract shared by the browser
//! console (`client`), the command-line tool (`cli`), and tests. Every
//! back-end endpoint has exactly one [`Endpoint`] variant and one
//! [`AdminApi`] method; the byte-level HTTP work is delegated to a
//! [`Transport`] so the same facade runs over browser fetch, `reqwest`, or
//! the recording double in [`testing`].

pub mod client;
pub mod endpoint;
pub mod error;
#[cfg(feature = "reqwest")]
pub mod http;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;
pub mod types;

pub use client::AdminApi;
pub use endpoint::{Encoding, Endpoint};
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, FormPart, Method, PartValue, RequestBody, Transport, Upload};
