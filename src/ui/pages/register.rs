//! Register page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::session::{SessionState, landing_path_for, use_session};
use crate::ui::auth::RegisterForm;
use crate::ui::header::SiteHeader;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if let SessionState::Authenticated(user) = session.state.get() {
            let navigate = use_navigate();
            navigate(landing_path_for(&user.role), Default::default());
        }
    });

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader />

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <RegisterForm />
                </div>
            </main>
        </div>
    }
}
