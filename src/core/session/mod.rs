//! Session lifecycle: credential persistence, profile rules, and the
//! reactive session store.

pub mod context;
pub mod credential;
pub mod profile;
pub mod types;

pub use context::{
    RegisterRequest, SessionContext, UpdateProfileRequest, handle_session_invalidated,
    provide_session_context, use_session,
};
pub use types::{Role, SessionState, User, landing_path_for};
