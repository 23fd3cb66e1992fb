//! HTTP gateway
//!
//! Single point of outbound traffic for the whole app. Every call:
//! - attaches `Authorization: Bearer <token>` when a credential is stored,
//! - unwraps the server envelope on success,
//! - recovers from a 401 exactly once via the shared refresh exchange,
//! - routes terminal failures through the presentation hooks.
//!
//! The gateway never navigates and knows nothing about the router or the
//! view tree; side effects go through [`GatewayHooks`] installed by the app
//! shell at startup.

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// HTTP verbs the backend contract uses.
#[derive(Clone, Copy, Debug)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Side-effect handlers installed by the app shell.
///
/// `toast` shows a transient error notice, `not_found` navigates to the
/// not-found page, `session_invalidated` is the hard-logout signal emitted
/// when the refresh exchange itself fails.
#[derive(Clone)]
pub struct GatewayHooks {
    pub toast: Rc<dyn Fn(String)>,
    pub not_found: Rc<dyn Fn()>,
    pub session_invalidated: Rc<dyn Fn()>,
}

/// Fetch and decode a payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(request(Method::Get, path, None).await?)
}

/// POST a JSON body and decode the response payload.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|_| ApiError::Decode)?;
    decode(request(Method::Post, path, Some(body)).await?)
}

/// PUT a JSON body and decode the response payload.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|_| ApiError::Decode)?;
    decode(request(Method::Put, path, Some(body)).await?)
}

/// DELETE, discarding whatever body the server answers with.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    request(Method::Delete, path, None).await.map(|_| ())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|_| {
        let err = ApiError::Decode;
        present(&err);
        err
    })
}

#[cfg(not(feature = "ssr"))]
pub use client::{install_hooks, present, request};

#[cfg(not(feature = "ssr"))]
mod client {
    use std::cell::RefCell;

    use serde::Deserialize;
    use serde_json::Value;

    use super::{GatewayHooks, Method};
    use crate::core::http::error::ApiError;
    use crate::core::http::payload;
    use crate::core::http::refresh::{
        RefreshClaim, RefreshCoordinator, RefreshOutcome, may_recover,
    };
    use crate::core::session::credential;

    thread_local! {
        static COORDINATOR: RefreshCoordinator = RefreshCoordinator::new();
        static HOOKS: RefCell<Option<GatewayHooks>> = const { RefCell::new(None) };
    }

    /// Install the presentation hooks. Called once from the app shell.
    pub fn install_hooks(hooks: GatewayHooks) {
        HOOKS.with(|slot| slot.borrow_mut().replace(hooks));
    }

    fn fire_toast(message: String) {
        if let Some(hooks) = HOOKS.with(|slot| slot.borrow().clone()) {
            (hooks.toast)(message);
        }
    }

    fn fire_not_found() {
        if let Some(hooks) = HOOKS.with(|slot| slot.borrow().clone()) {
            (hooks.not_found)();
        }
    }

    fn fire_session_invalidated() {
        if let Some(hooks) = HOOKS.with(|slot| slot.borrow().clone()) {
            (hooks.session_invalidated)();
        }
    }

    /// Route a terminal error to the presentation policy: 404 becomes
    /// navigation, everything else with a message becomes a toast.
    pub fn present(err: &ApiError) {
        if matches!(err, ApiError::NotFound) {
            fire_not_found();
            return;
        }
        if let Some(message) = err.user_message() {
            fire_toast(message);
        }
    }

    /// Issue a request, transparently recovering from one expired-token 401.
    pub async fn request(
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let token = credential::access_token();
        match send_once(method, path, body.as_ref(), token.as_deref()).await {
            Ok(value) => Ok(value),
            Err(err) if may_recover(&err, false) => {
                // Refresh failures were already surfaced as the hard-logout
                // signal; they are not toasted here.
                let token = refreshed_token().await?;
                match send_once(method, path, body.as_ref(), Some(&token)).await {
                    Ok(value) => Ok(value),
                    Err(err) => {
                        // A second 401 on the same request is terminal.
                        present(&err);
                        Err(err)
                    }
                }
            }
            Err(err) => {
                present(&err);
                Err(err)
            }
        }
    }

    /// One attempt on the wire: build, send, shape the response.
    async fn send_once(
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match method {
            Method::Get => Request::get(path),
            Method::Post => Request::post(path),
            Method::Put => Request::put(path),
            Method::Delete => Request::delete(path),
        };
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .json(json)
                .map_err(|_| ApiError::Decode)?,
            None => builder.build().map_err(|_| ApiError::Network)?,
        };

        let response = request.send().await.map_err(|_| ApiError::Network)?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if (200..300).contains(&status) {
            if text.is_empty() {
                return Ok(Value::Null);
            }
            let parsed: Value = serde_json::from_str(&text).map_err(|_| ApiError::Decode)?;
            Ok(payload::unwrap_envelope(parsed))
        } else {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .as_ref()
                .and_then(payload::server_message);
            Err(ApiError::from_status(status, message))
        }
    }

    /// Obtain a post-refresh token, either by leading the single exchange or
    /// by waiting on the one already in flight.
    async fn refreshed_token() -> Result<String, ApiError> {
        let claim = COORDINATOR.with(RefreshCoordinator::claim);
        match claim {
            RefreshClaim::Waiter(receiver) => {
                receiver.await.map_err(|_| ApiError::Network)?
            }
            RefreshClaim::Leader => {
                let outcome = exchange_refresh().await;
                match &outcome {
                    Ok(token) => credential::store(token),
                    Err(_) => {
                        credential::clear();
                        fire_session_invalidated();
                    }
                }
                COORDINATOR.with(|coordinator| coordinator.settle(outcome.clone()));
                outcome
            }
        }
    }

    #[derive(Deserialize)]
    struct RefreshExchange {
        #[serde(rename = "accessToken")]
        access_token: String,
    }

    /// The sole refresh call. Goes straight to the wire so it can never
    /// recurse into the 401 recovery path.
    async fn exchange_refresh() -> RefreshOutcome {
        let token = credential::access_token();
        let value = send_once(Method::Get, "/api/auth/refresh", None, token.as_deref()).await?;
        let exchange: RefreshExchange =
            serde_json::from_value(value).map_err(|_| ApiError::Decode)?;
        Ok(exchange.access_token)
    }
}

// SSR stubs. Data flows only in the browser; server-side rendering sees the
// loading state and hydration takes it from there.

#[cfg(feature = "ssr")]
pub fn install_hooks(_hooks: GatewayHooks) {}

#[cfg(feature = "ssr")]
pub fn present(_err: &ApiError) {}

#[cfg(feature = "ssr")]
pub async fn request(
    _method: Method,
    _path: &str,
    _body: Option<Value>,
) -> Result<Value, ApiError> {
    Err(ApiError::Network)
}
