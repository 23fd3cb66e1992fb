pub mod auth;
pub mod events;
pub mod guard;
pub mod header;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod theme;

pub use guard::RequireAuth;
pub use icon::{Icon, icons};
pub use notifications::{
    NotificationContext, NotificationsContainer, provide_notification_context, use_notifications,
};
pub use theme::{ThemeMode, provide_theme_context, use_theme_context};
