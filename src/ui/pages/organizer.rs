//! Organizer dashboard page component
//!
//! The organizer's own events with delete, plus the entry point into the
//! event creation wizard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use uuid::Uuid;

use crate::core::events::{EventFilter, EventSummary, api};
use crate::ui::events::EventTable;
use crate::ui::header::SiteHeader;
use crate::ui::notifications::use_notifications;

/// Organizer dashboard page component
#[component]
pub fn OrganizerDashboardPage() -> impl IntoView {
    let notifications = use_notifications();

    let events = RwSignal::new(Vec::<EventSummary>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.get();
        spawn_local(async move {
            loading.set(true);
            let filter = EventFilter {
                mine: true,
                ..Default::default()
            };
            if let Ok(response) = api::list_events(&filter).await {
                events.set(response.events);
            }
            loading.set(false);
        });
    });

    let on_delete = move |id: Uuid| {
        spawn_local(async move {
            if api::delete_event(id).await.is_ok() {
                notifications.success("Event deleted.");
                reload.update(|n| *n += 1);
            }
        });
    };

    view! {
        <div class="min-h-screen bg-theme-primary">
            <SiteHeader />

            <main class="max-w-5xl mx-auto px-4 py-8">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-2xl font-bold text-theme-primary">"Your Events"</h1>
                    <A
                        href="/organizer/new"
                        attr:class="px-4 py-2 bg-accent-primary hover:bg-accent-primary-hover text-white text-sm font-medium rounded-lg transition-colors"
                    >
                        "+ New Event"
                    </A>
                </div>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center justify-center py-20">
                                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary"></div>
                            </div>
                        }
                        .into_any()
                    } else if events.get().is_empty() {
                        view! {
                            <div class="text-center py-20 border border-dashed border-theme rounded-lg">
                                <p class="text-theme-secondary mb-4">"You haven't created any events yet."</p>
                                <A
                                    href="/organizer/new"
                                    attr:class="text-accent-primary hover:underline font-medium"
                                >
                                    "Create your first event"
                                </A>
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
