//! HTTP transport with session-aware request authorization.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::Unavailable`] since the backend is only
//! reachable from the browser.
//!
//! DESIGN
//! ======
//! The bearer header is derived from the current session on every call; no
//! shared client object carries hidden authorization state. Each outcome
//! then flows through [`apply_session_policy`], the one cross-cutting stage
//! that reacts to authorization failures for all endpoints.
//!
//! ERROR HANDLING
//! ==============
//! A 401 forces logout and a redirect to the login surface, but the original
//! error still reaches the caller so local handling runs. Every other error
//! passes through untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::routes;
use crate::state::session::{self, Session};

/// HTTP method for [`request_json`] and [`request_unit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Failure of a REST call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never completed (connection refused, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only available in the browser.
    #[error("not available off-browser")]
    Unavailable,
}

/// Authorization header value for the given session, if authenticated.
pub fn bearer_header(session: &Session) -> Option<String> {
    session
        .is_authenticated()
        .then(|| format!("Bearer {}", session.token))
}

/// Whether an error is the backend's invalid-session signal (status 401).
pub fn is_unauthorized(error: &ApiError) -> bool {
    matches!(error, ApiError::Status { status: 401, .. })
}

/// Session policy applied to every request outcome.
///
/// A 401 from any endpoint means the credential is no longer valid: the
/// session is cleared and the browser navigates to the login surface. The
/// outcome is returned unchanged either way.
pub fn apply_session_policy<T>(
    session: RwSignal<Session>,
    outcome: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if let Err(error) = &outcome {
        if is_unauthorized(error) {
            leptos::logging::warn!("session rejected by backend, signing out");
            session::logout(session);
            redirect_to_login();
        }
    }
    outcome
}

/// Issue a request and decode the JSON response body.
///
/// # Errors
///
/// Returns [`ApiError`] for transport failures, non-2xx statuses, and
/// undecodable bodies. A 401 additionally clears the session, see
/// [`apply_session_policy`].
pub async fn request_json<T: DeserializeOwned>(
    session: RwSignal<Session>,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let outcome = send(session, method, path, body).await;
    let outcome = match outcome {
        Ok(response) => decode(response).await,
        Err(error) => Err(error),
    };
    apply_session_policy(session, outcome)
}

/// Issue a request and discard the response body (e.g. `204 No Content`).
///
/// # Errors
///
/// Same contract as [`request_json`] minus the decode step.
pub async fn request_unit(
    session: RwSignal<Session>,
    method: Method,
    path: &str,
) -> Result<(), ApiError> {
    let outcome = send(session, method, path, None).await.map(|_| ());
    apply_session_policy(session, outcome)
}

/// Leave the SPA and load the login surface fresh.
///
/// A full page load here also drops any view state that belonged to the
/// invalidated session.
fn redirect_to_login() {
    let Some(path) = routes::path_to(routes::LOGIN) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    session: RwSignal<Session>,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Delete => Request::delete(path),
    };
    let builder = match bearer_header(&session.get_untracked()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    };
    let request = match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            message,
        });
    }
    Ok(response)
}

#[cfg(not(feature = "hydrate"))]
async fn send(
    session: RwSignal<Session>,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<(), ApiError> {
    let _ = (session, method, path, body);
    Err(ApiError::Unavailable)
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn decode<T: DeserializeOwned>(response: ()) -> Result<T, ApiError> {
    let _ = response;
    Err(ApiError::Unavailable)
}
