//! Session state, user profile, and role routing

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::credential::StoredCredential;

/// User profile as the API reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    /// Role identifier string; unknown values route to the root path.
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

/// Authentication state for the current browser process.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// From process start until the silent restore settles. Guarded subtrees
    /// render a spinner, never content, while in this state.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Known roles and their landing areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Organizer,
    Staff,
    Customer,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "administrator" => Some(Role::Admin),
            "organizer" => Some(Role::Organizer),
            "staff" => Some(Role::Staff),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "administrator",
            Role::Organizer => "organizer",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Organizer => "Organizer",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
        }
    }

    /// Where this role lands after login.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Organizer => "/organizer",
            Role::Staff => "/staff",
            Role::Customer => "/",
        }
    }
}

/// Post-login destination for a role identifier. Unmapped or missing roles
/// land on the root path.
pub fn landing_path_for(role: &str) -> &'static str {
    Role::parse(role).map_or("/", |role| role.landing_path())
}

/// What the silent restore should do given the stored credential.
#[derive(Debug, PartialEq)]
pub enum RestorePlan {
    /// No usable credential: settle as unauthenticated without a network call.
    Stay,
    /// Verify the token against the account endpoint.
    Fetch(String),
}

pub fn restore_plan(credential: Option<StoredCredential>, now: i64) -> RestorePlan {
    match credential {
        Some(credential) if !credential.is_expired(now) => RestorePlan::Fetch(credential.token),
        _ => RestorePlan::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: Uuid::nil(),
            email: "a@b.c".to_string(),
            full_name: "Ada".to_string(),
            role: role.to_string(),
            phone: None,
            age: None,
        }
    }

    #[test]
    fn roles_round_trip() {
        for role in [Role::Admin, Role::Organizer, Role::Staff, Role::Customer] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn landing_paths_follow_the_fixed_table() {
        assert_eq!(landing_path_for("administrator"), "/admin");
        assert_eq!(landing_path_for("organizer"), "/organizer");
        assert_eq!(landing_path_for("staff"), "/staff");
        assert_eq!(landing_path_for("customer"), "/");
    }

    #[test]
    fn unmapped_and_missing_roles_land_on_root() {
        assert_eq!(landing_path_for("superuser"), "/");
        assert_eq!(landing_path_for(""), "/");
    }

    #[test]
    fn session_state_accessors() {
        assert!(!SessionState::Loading.is_authenticated());
        assert!(!SessionState::Unauthenticated.is_authenticated());
        let state = SessionState::Authenticated(user("customer"));
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.full_name.as_str()), Some("Ada"));
    }

    #[test]
    fn restore_skips_network_without_credential() {
        assert_eq!(restore_plan(None, 100), RestorePlan::Stay);
    }

    #[test]
    fn restore_skips_network_with_expired_credential() {
        let credential = StoredCredential {
            token: "tok".to_string(),
            expires_at: 99,
        };
        assert_eq!(restore_plan(Some(credential), 100), RestorePlan::Stay);
    }

    #[test]
    fn restore_verifies_live_credential() {
        let credential = StoredCredential {
            token: "tok".to_string(),
            expires_at: 101,
        };
        assert_eq!(
            restore_plan(Some(credential), 100),
            RestorePlan::Fetch("tok".to_string())
        );
    }
}
