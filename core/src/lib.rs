//! Synchronous client for the WZS.Net care-home service.
//!
//! # Overview
//! Every remote operation is a JSON POST to `{base_url}api/{controller}` with
//! the body `{ "method": ..., "params": ... }`. The response body is either the
//! typed result or, on 4xx/5xx, `{ "message": ... }`.
//!
//! # Design
//! - `WzsServiceClient` holds the base URL and a `Transport`. It keeps no
//!   session state: callers pass the `SessionId` from `login` in each
//!   parameter object.
//! - Requests are built and responses parsed without touching the network;
//!   only the `Transport` performs I/O, so the mapping is testable with a
//!   scripted transport.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

mod api;
pub mod client;
pub mod dates;
pub mod envelope;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{parse_empty, parse_result, WzsServiceClient};
pub use envelope::{Controller, RpcRequest};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::SessionId;
