//! Generic call primitive for the WZS.Net service.
//!
//! # Design
//! `WzsServiceClient` holds the base URL and an owned `Transport`. A call is
//! split the same way on every method:
//! `build_call` turns (controller, method, params) into an `HttpRequest`, the
//! transport executes it, and `parse_result`/`parse_empty` map the response to
//! a typed value or an `ApiError`. The typed wrappers in `crate::api` are thin
//! restatements of `call` with fixed method names and types.
//!
//! There is no retry, no backoff and no timeout override: one call is one POST.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::envelope::{Controller, ErrorBody, RpcRequest};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

const JSON: &str = "application/json";

/// Typed client for the WZS.Net service.
///
/// Construction performs no I/O. The transport (and its pooled connections) is
/// released when the client is dropped or passed to `close`.
#[derive(Debug, Clone)]
pub struct WzsServiceClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl WzsServiceClient<UreqTransport> {
    /// Client over a fresh `ureq` agent. `base_url` is the service root, e.g.
    /// `http://csmain.caresolutions.be:9000/`.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T> WzsServiceClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL of a controller: `{base_url}api/{controller}`.
    pub fn endpoint(&self, controller: Controller) -> String {
        format!("{}api/{}", self.base_url, controller.as_str())
    }

    /// Build the POST for `method` on `controller`. `params` of `None` omits
    /// the `params` member from the envelope.
    pub fn build_call<P: Serialize>(
        &self,
        controller: Controller,
        method: &str,
        params: Option<&P>,
    ) -> Result<HttpRequest, ApiError> {
        let envelope = RpcRequest { method, params };
        let body = serde_json::to_string(&envelope)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            url: self.endpoint(controller),
            headers: vec![
                ("content-type".to_string(), JSON.to_string()),
                ("accept".to_string(), JSON.to_string()),
            ],
            body,
        })
    }

    /// Release the client and its transport.
    ///
    /// Takes `self` by value, so a second close cannot be written.
    pub fn close(self) {}
}

impl<T: Transport> WzsServiceClient<T> {
    /// Call `method` and deserialize the success body as `R`.
    pub fn call<P, R>(&self, controller: Controller, method: &str, params: &P) -> Result<R, ApiError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = self.build_call(controller, method, Some(params))?;
        let response = self.send(method, &request)?;
        parse_result(&response)
    }

    /// Call `method` and discard the success body.
    pub fn call_void<P: Serialize>(
        &self,
        controller: Controller,
        method: &str,
        params: &P,
    ) -> Result<(), ApiError> {
        let request = self.build_call(controller, method, Some(params))?;
        let response = self.send(method, &request)?;
        parse_empty(&response)
    }

    /// Call a method that takes no parameters at all.
    pub fn call_without_params<R: DeserializeOwned>(
        &self,
        controller: Controller,
        method: &str,
    ) -> Result<R, ApiError> {
        let request = self.build_call::<()>(controller, method, None)?;
        let response = self.send(method, &request)?;
        parse_result(&response)
    }

    fn send(&self, method: &str, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method, url = %request.url, "posting request");
        let response = self.transport.execute(request)?;
        debug!(method, status = response.status, "received response");
        Ok(response)
    }
}

/// Map a response to `R`, or to the `ApiError` its status implies.
pub fn parse_result<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    check_status(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::MalformedResponse {
        status: response.status,
        reason: e.to_string(),
    })
}

/// Map a response to `()`, ignoring any success body.
pub fn parse_empty(response: &HttpResponse) -> Result<(), ApiError> {
    check_status(response)
}

/// Statuses below 400 succeed; 4xx is a client error, 5xx and up a server
/// error, both carrying the body's `message`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    let status = response.status;
    if status < 400 {
        return Ok(());
    }

    let error: ErrorBody =
        serde_json::from_str(&response.body).map_err(|e| ApiError::MalformedResponse {
            status,
            reason: format!("error body is not valid JSON: {e}"),
        })?;
    let message = error.message.unwrap_or_default();

    if status < 500 {
        Err(ApiError::Client { status, message })
    } else {
        Err(ApiError::Server { status, message })
    }
}
