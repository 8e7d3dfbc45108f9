//! JSON envelopes exchanged with the service.
//!
//! Every call posts `{ "method": ..., "params": ... }` to a controller path.
//! Errors come back as `{ "message": ... }`.

use serde::{Deserialize, Serialize};

/// URL path segment grouping related remote methods.
///
/// The segment is sent exactly as stored; the client never changes its case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Controller(&'static str);

impl Controller {
    /// Session setup, user validation and database discovery.
    pub const LOGIN: Controller = Controller("login");
    /// Care-home data. Every method requires a session id.
    pub const WZS: Controller = Controller("wzs");

    /// The legacy `connections` call is routed through `Login` with a capital L.
    pub(crate) const LOGIN_LEGACY: Controller = Controller("Login");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Request body for a single remote call, generic over the parameter type.
///
/// `params` is omitted entirely for parameterless methods.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'a P>,
}

impl<'a, P> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: &'a P) -> Self {
        Self {
            method,
            params: Some(params),
        }
    }
}

impl<'a> RpcRequest<'a, ()> {
    pub fn without_params(method: &'a str) -> Self {
        Self {
            method,
            params: None,
        }
    }
}

/// Error body returned with 4xx and 5xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
