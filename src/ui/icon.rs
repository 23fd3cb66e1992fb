use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing/coloring
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const TICKET: &str = "ticket";
    pub const CALENDAR: &str = "calendar";
    pub const SEARCH: &str = "search";
    pub const LOCATION: &str = "location";
    pub const PLUS: &str = "plus";
    pub const EDIT: &str = "edit";
    pub const TRASH: &str = "trash";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const WARNING: &str = "warning";
    pub const USER: &str = "user";
    pub const LOGOUT: &str = "logout";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const LOADER: &str = "loader";
    pub const QR: &str = "qr";
}
