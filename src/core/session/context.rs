//! Session store
//!
//! Owns the authentication state for the lifetime of the browser process:
//! silent restore on startup, login completion with role-based navigation,
//! logout, and the hard-logout handler for the gateway's session-invalidated
//! signal. All consumers read through [`use_session`]; nothing else touches
//! the stored credential except the gateway's bearer read.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use crate::core::http::ApiError;
use crate::core::http::gateway;

use super::credential;
use super::profile::{apply_cached_age_fallback, merge_profile};
use super::types::{RestorePlan, SessionState, User, landing_path_for, restore_plan};

/// Reactive session context provided at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current authentication state.
    pub state: RwSignal<SessionState>,
    /// An auth operation (login/register) is in flight.
    pub loading: RwSignal<bool>,
    /// Error message from the last auth operation.
    pub error: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.state.get().user().cloned()
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Provide the session context and kick off the silent restore.
///
/// State starts as `Loading` on both server and client so guarded subtrees
/// render a spinner until the restore settles, never a flash of
/// unauthenticated UI for a user who is actually signed in.
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        state: RwSignal::new(SessionState::Loading),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };

    // Restore runs client-side after hydration; the server never leaves
    // `Loading` for guarded content.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            spawn_local(async move {
                restore(ctx).await;
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Handler for the gateway's session-invalidated signal: the refresh
/// exchange failed, the credential is gone, force the app back to the root
/// path unless it is already there.
pub fn handle_session_invalidated(session: SessionContext) {
    credential::clear();
    session.state.set(SessionState::Unauthenticated);

    #[cfg(not(feature = "ssr"))]
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.pathname().map(|path| path != "/").unwrap_or(false) {
            let _ = location.set_href("/");
        }
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    user: User,
}

/// Registration payload for `POST /api/auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// Profile update payload for `PUT /api/users`.
#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub phone: Option<String>,
    pub age: Option<u32>,
}

/// Silent restore, run once per process start.
async fn restore(session: SessionContext) {
    match restore_plan(credential::load(), credential::now_secs()) {
        RestorePlan::Stay => session.state.set(SessionState::Unauthenticated),
        RestorePlan::Fetch(_) => match fetch_account().await {
            Ok(user) => {
                let user = enrich_profile(user).await;
                session.state.set(SessionState::Authenticated(user));
            }
            Err(_) => {
                credential::clear();
                session.state.set(SessionState::Unauthenticated);
            }
        },
    }
}

/// Exchange credentials, then complete the login. On success the user ends
/// up on their role's landing page with history replaced.
pub async fn login(session: SessionContext, email: &str, password: &str) -> Result<User, ApiError> {
    session.loading.set(true);
    session.error.set(None);

    let result: Result<LoginResponse, ApiError> =
        gateway::post_json("/api/auth/login", &LoginRequest { email, password }).await;

    let outcome = match result {
        Ok(response) => Ok(complete_login(session, response.user, response.access_token).await),
        Err(err) => {
            session.error.set(err.user_message());
            Err(err)
        }
    };

    session.loading.set(false);
    outcome
}

/// Persist the token, enrich the profile, publish the state, and navigate to
/// the role's landing path.
pub async fn complete_login(session: SessionContext, user: User, token: String) -> User {
    credential::store(&token);

    let user = enrich_profile(user).await;
    let destination = landing_path_for(&user.role);
    session.state.set(SessionState::Authenticated(user.clone()));

    let navigate = use_navigate();
    navigate(
        destination,
        NavigateOptions {
            replace: true,
            ..Default::default()
        },
    );

    user
}

/// Create an account. The caller switches to the login form on success.
pub async fn register(session: SessionContext, request: &RegisterRequest) -> Result<(), ApiError> {
    session.loading.set(true);
    session.error.set(None);

    let result: Result<serde_json::Value, ApiError> =
        gateway::post_json("/api/auth/register", request).await;

    session.loading.set(false);
    match result {
        Ok(_) => Ok(()),
        Err(err) => {
            session.error.set(err.user_message());
            Err(err)
        }
    }
}

/// Log out: best-effort server invalidation, then clear everything locally
/// and go back to the root path. Safe to call when already logged out.
pub async fn logout(session: SessionContext) {
    let _ = gateway::request(gateway::Method::Post, "/api/auth/logout", None).await;

    credential::clear();
    session.state.set(SessionState::Unauthenticated);

    let navigate = use_navigate();
    navigate("/", Default::default());
}

/// Update the profile via `PUT /api/users` and publish the merged result.
pub async fn update_profile(
    session: SessionContext,
    request: &UpdateProfileRequest,
) -> Result<User, ApiError> {
    let updated: User = gateway::put_json("/api/users", request).await?;

    if let Some(age) = request.age.filter(|age| *age != 0) {
        credential::remember_age(&updated.id.to_string(), age);
    }

    session.state.set(SessionState::Authenticated(updated.clone()));
    Ok(updated)
}

async fn fetch_account() -> Result<User, ApiError> {
    let account: AccountResponse = gateway::get_json("/api/auth/account").await?;
    Ok(account.user)
}

async fn fetch_user_detail(id: uuid::Uuid) -> Result<User, ApiError> {
    gateway::get_json(&format!("/api/users/{id}")).await
}

/// Merge the basic profile with the detail lookup. Detail failures are
/// swallowed; the basic profile is enough to run the session.
async fn enrich_profile(basic: User) -> User {
    let detail = fetch_user_detail(basic.id).await.ok();
    let mut user = merge_profile(basic, detail);
    user.age = apply_cached_age_fallback(user.age, credential::cached_age(&user.id.to_string()));
    user
}
