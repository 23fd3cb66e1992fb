//! Login page component
//!
//! A standalone page for user login; already-authenticated visitors are
//! sent to their role's landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::session::{SessionState, landing_path_for, use_session};
use crate::ui::auth::LoginForm;
use crate::ui::header::SiteHeader;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
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
                    <LoginForm />
                </div>
            </main>

            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2026 Eventra. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}
