//! Route guard
//!
//! Gates a page subtree on session state, optionally restricted to a role
//! allow-list. While the silent restore is still running the guard shows a
//! spinner; once settled it either renders the subtree or sends the user
//! back to the root path. Guards only read session state; they never fetch
//! or mutate.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::session::{Role, SessionState, use_session};

/// What the guard does for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Restore still in flight: render a spinner, not the subtree.
    Wait,
    /// Render the guarded subtree.
    Render,
    /// Not signed in, or role not allowed: go to the root path.
    Redirect,
}

/// Synchronous guard decision. An empty allow-list admits any authenticated
/// user; otherwise the user's role must parse to a listed role.
pub fn guard_outcome(state: &SessionState, allowed: &[Role]) -> GuardOutcome {
    match state {
        SessionState::Loading => GuardOutcome::Wait,
        SessionState::Unauthenticated => GuardOutcome::Redirect,
        SessionState::Authenticated(user) => {
            if allowed.is_empty() {
                return GuardOutcome::Render;
            }
            match Role::parse(&user.role) {
                Some(role) if allowed.contains(&role) => GuardOutcome::Render,
                _ => GuardOutcome::Redirect,
            }
        }
    }
}

/// Guard component wrapping a protected page subtree.
#[component]
pub fn RequireAuth(
    /// Roles allowed to see the subtree; empty means any authenticated user
    #[prop(optional)]
    roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();

    // Redirect as a side effect so rendering stays pure.
    {
        let roles = roles.clone();
        Effect::new(move |_| {
            if guard_outcome(&session.state.get(), &roles) == GuardOutcome::Redirect {
                let navigate = use_navigate();
                navigate("/", Default::default());
            }
        });
    }

    view! {
        {move || match guard_outcome(&session.state.get(), &roles) {
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::Wait => view! {
                <div class="flex items-center justify-center py-20">
                    <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary"></div>
                </div>
            }
            .into_any(),
            GuardOutcome::Redirect => ().into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::User;
    use uuid::Uuid;

    fn authenticated(role: &str) -> SessionState {
        SessionState::Authenticated(User {
            id: Uuid::nil(),
            email: "a@b.c".to_string(),
            full_name: "Ada".to_string(),
            role: role.to_string(),
            phone: None,
            age: None,
        })
    }

    #[test]
    fn loading_waits_instead_of_rendering_or_redirecting() {
        assert_eq!(
            guard_outcome(&SessionState::Loading, &[]),
            GuardOutcome::Wait
        );
        assert_eq!(
            guard_outcome(&SessionState::Loading, &[Role::Admin]),
            GuardOutcome::Wait
        );
    }

    #[test]
    fn unauthenticated_redirects_to_root() {
        assert_eq!(
            guard_outcome(&SessionState::Unauthenticated, &[]),
            GuardOutcome::Redirect
        );
    }

    #[test]
    fn any_authenticated_user_passes_an_open_guard() {
        assert_eq!(
            guard_outcome(&authenticated("customer"), &[]),
            GuardOutcome::Render
        );
    }

    #[test]
    fn role_allow_list_is_enforced() {
        let allowed = [Role::Organizer];
        assert_eq!(
            guard_outcome(&authenticated("organizer"), &allowed),
            GuardOutcome::Render
        );
        assert_eq!(
            guard_outcome(&authenticated("customer"), &allowed),
            GuardOutcome::Redirect
        );
    }

    #[test]
    fn unknown_roles_never_pass_a_restricted_guard() {
        assert_eq!(
            guard_outcome(&authenticated("superuser"), &[Role::Admin]),
            GuardOutcome::Redirect
        );
    }
}
