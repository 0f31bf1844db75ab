//! Auth Calls
//!
//! Register and login. Neither carries a token; credential acquisition
//! failures come back as the server's `detail` message.

use gloo_net::http::Request;
use serde::Serialize;

use super::{endpoint, fail, transport, with_deadline, ApiError};
use crate::models::TokenResponse;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Create an account. Duplicate emails come back as an `Api` error.
pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    with_deadline(async move {
        let resp = Request::post(&endpoint("/register"))
            .json(&Credentials { email, password })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return fail(resp).await;
        }
        Ok(())
    })
    .await
}

/// Exchange credentials for a bearer token
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    with_deadline(async move {
        let resp = Request::post(&endpoint("/login"))
            .json(&Credentials { email, password })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return fail(resp).await;
        }
        resp.json().await.map_err(transport)
    })
    .await
}
