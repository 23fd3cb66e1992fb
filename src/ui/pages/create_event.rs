//! Event creation page component, hosting the wizard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::events::EventWizard;
use crate::ui::header::SiteHeader;

/// Event creation page component
#[component]
pub fn CreateEventPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary">
            <SiteHeader />

            <main class="max-w-3xl mx-auto px-4 py-8">
                <div class="mb-8">
                    <A href="/organizer" attr:class="text-sm text-theme-secondary hover:text-theme-primary">
                        "← Back to your events"
                    </A>
                    <h1 class="mt-2 text-2xl font-bold text-theme-primary">"Create Event"</h1>
                </div>

                <EventWizard />
            </main>
        </div>
    }
}
