//! Remote API Bindings
//!
//! HTTP wrappers for the task service, organized by domain. Every call is
//! raced against a deadline so a hung request surfaces as an error instead
//! of leaving the UI waiting forever.

mod auth;
mod tasks;

pub use auth::*;
pub use tasks::*;

use std::fmt;
use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::{RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;

use crate::models::ErrorBody;
use crate::session::SessionContext;

/// Compile-time override for where the task service lives
const API_URL: &str = match option_env!("TASKBOX_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Failure of a remote call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Token missing, expired, or rejected by the server
    Unauthorized,
    /// Server-reported failure with a human-readable `detail`
    Api(String),
    /// Non-2xx response without a usable body
    Http(u16),
    /// Transport failure (connection refused, CORS, ...)
    Network(String),
    /// No response within the request deadline
    Timeout,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "not authorized"),
            ApiError::Api(detail) => write!(f, "{}", detail),
            ApiError::Http(status) => write!(f, "server error (HTTP {})", status),
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Timeout => write!(f, "request timed out"),
        }
    }
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", API_URL, path)
}

pub(crate) fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Attach the session's bearer token, if any. The server answers missing
/// tokens with 401, which `fail_protected` turns into `Unauthorized`.
pub(crate) fn bearer(req: RequestBuilder, session: &SessionContext) -> RequestBuilder {
    match session.token() {
        Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
        None => req,
    }
}

/// Race a request against the deadline
pub(crate) async fn with_deadline<T, F>(fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let deadline = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    match select(Box::pin(fut), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

/// Map a non-2xx auth-flow response, keeping the server's `detail` verbatim
pub(crate) async fn fail<T>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => Err(ApiError::Api(body.detail)),
        Err(_) => Err(ApiError::Http(status)),
    }
}

/// Map a non-2xx task-flow response; a rejected token is distinguished so
/// the store can force a logout.
pub(crate) async fn fail_protected<T>(resp: Response) -> Result<T, ApiError> {
    match resp.status() {
        401 | 403 => Err(ApiError::Unauthorized),
        _ => fail(resp).await,
    }
}
