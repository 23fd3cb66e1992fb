//! Authentication UI module
//!
//! Login/register forms and the header user menu, all driven by the
//! session context.

mod login_form;
mod register_form;
mod user_menu;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use user_menu::UserMenu;
