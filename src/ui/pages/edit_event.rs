//! Event edit page component, hosting the wizard in edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::core::events::{EventDetail, api};
use crate::ui::events::EventWizard;
use crate::ui::header::SiteHeader;

/// Event edit page component
#[component]
pub fn EditEventPage() -> impl IntoView {
    let params = use_params_map();
    let event = RwSignal::new(None::<EventDetail>);
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        let id = params
            .get()
            .get("id")
            .and_then(|raw| Uuid::parse_str(&raw).ok());
        let Some(id) = id else {
            loading.set(false);
            return;
        };
        spawn_local(async move {
            loading.set(true);
            if let Ok(detail) = api::fetch_event(id).await {
                event.set(Some(detail));
            }
            loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-theme-primary">
            <SiteHeader />

            <main class="max-w-3xl mx-auto px-4 py-8">
                <div class="mb-8">
                    <A href="/organizer" attr:class="text-sm text-theme-secondary hover:text-theme-primary">
                        "← Back to your events"
                    </A>
                    <h1 class="mt-2 text-2xl font-bold text-theme-primary">"Edit Event"</h1>
                </div>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center justify-center py-20">
                                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary"></div>
                            </div>
                        }
                        .into_any()
                    } else {
                        match event.get() {
                            Some(detail) => view! { <EventWizard existing=detail /> }.into_any(),
                            None => view! {
                                <p class="text-theme-secondary">"This event could not be loaded."</p>
                            }
                            .into_any(),
                        }
                    }
                }}
            </main>
        </div>
    }
}
