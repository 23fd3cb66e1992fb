//! Admin dashboard page component
//!
//! Administration view over the whole event catalog with removal, plus
//! headline counts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::core::events::{EventFilter, EventSummary, api};
use crate::ui::events::EventTable;
use crate::ui::header::SiteHeader;
use crate::ui::notifications::use_notifications;

/// Admin dashboard page component
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let notifications = use_notifications();

    let events = RwSignal::new(Vec::<EventSummary>::new());
    let total = RwSignal::new(0u32);
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.get();
        spawn_local(async move {
            loading.set(true);
            if let Ok(response) = api::list_events(&EventFilter::default()).await {
                events.set(response.events);
                total.set(response.total);
            }
            loading.set(false);
        });
    });

    let on_delete = move |id: Uuid| {
        spawn_local(async move {
            if api::delete_event(id).await.is_ok() {
                notifications.success("Event removed.");
                reload.update(|n| *n += 1);
            }
        });
    };

    let sold_out = move || events.get().iter().filter(|event| event.sold_out).count();

    view! {
        <div class="min-h-screen bg-theme-primary">
            <SiteHeader />

            <main class="max-w-5xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-theme-primary mb-6">"Administration"</h1>

                // Headline counts
                <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 mb-8">
                    <div class="p-4 bg-theme-secondary border border-theme rounded-lg">
                        <p class="text-sm text-theme-tertiary">"Total events"</p>
                        <p class="text-2xl font-bold text-theme-primary">{move || total.get()}</p>
                    </div>
                    <div class="p-4 bg-theme-secondary border border-theme rounded-lg">
                        <p class="text-sm text-theme-tertiary">"On this page"</p>
                        <p class="text-2xl font-bold text-theme-primary">{move || events.get().len()}</p>
                    </div>
                    <div class="p-4 bg-theme-secondary border border-theme rounded-lg">
                        <p class="text-sm text-theme-tertiary">"Sold out"</p>
                        <p class="text-2xl font-bold text-theme-primary">{sold_out}</p>
                    </div>
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
                        view! { <EventTable events=events on_delete=on_delete /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
