use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::session::{Role, SessionContext, provide_session_context};
use crate::ui::guard::RequireAuth;
use crate::ui::notifications::{
    NotificationContext, NotificationsContainer, provide_notification_context,
};
use crate::ui::pages::{
    AdminDashboardPage, CreateEventPage, EditEventPage, EventDetailPage, LandingPage, LoginPage,
    NotFoundPage, OrganizerDashboardPage, ProfilePage, RegisterPage, StaffDashboardPage,
};
use crate::ui::theme::provide_theme_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Connect the gateway's presentation hooks to the UI layer: errors become
/// toasts, 404s navigate, a failed refresh hard-logs-out.
fn wire_gateway_hooks(session: SessionContext, notifications: NotificationContext) {
    #[cfg(not(feature = "ssr"))]
    {
        use std::rc::Rc;

        use crate::core::http::gateway::{self, GatewayHooks};
        use crate::core::session::handle_session_invalidated;

        gateway::install_hooks(GatewayHooks {
            toast: Rc::new(move |message| notifications.error(message)),
            not_found: Rc::new(|| {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/not-found");
                }
            }),
            session_invalidated: Rc::new(move || handle_session_invalidated(session)),
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (session, notifications);
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let _theme = provide_theme_context();
    let notifications = provide_notification_context();
    let session = provide_session_context();

    wire_gateway_hooks(session, notifications);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/eventra.css"/>

        // sets the document title
        <Title text="Eventra - Event Ticketing"/>

        <NotificationsContainer />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("not-found") view=NotFoundPage/>
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RequireAuth roles=vec![Role::Admin]><AdminDashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("organizer")
                    view=|| view! { <RequireAuth roles=vec![Role::Organizer]><OrganizerDashboardPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("organizer"), StaticSegment("new"))
                    view=|| view! { <RequireAuth roles=vec![Role::Organizer]><CreateEventPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("organizer"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| view! { <RequireAuth roles=vec![Role::Organizer, Role::Admin]><EditEventPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("staff")
                    view=|| view! { <RequireAuth roles=vec![Role::Staff]><StaffDashboardPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
