//! HTTP exchange types for the build/execute/parse split.
//!
//! # Design
//! These types describe one POST and its answer as plain data. The client
//! builds an `HttpRequest`, a `Transport` executes it, and the client parses
//! the resulting `HttpResponse`. Keeping the exchange as data lets the
//! request and error mapping be tested without a network.
//!
//! The service only accepts POST, so there is no method field.

/// An HTTP POST described as plain data.
///
/// Built by `WzsServiceClient::build_call`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed to
/// `parse_result` or `parse_empty`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Convenience constructor for a response without headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
