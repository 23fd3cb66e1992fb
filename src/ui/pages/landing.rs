//! Landing page component
//!
//! Public event browsing with search, category, and date filters. Signed-in
//! customers also see their upcoming tickets above the grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::events::{EventFilter, EventSummary, Ticket, api};
use crate::core::session::{Role, SessionState, use_session};
use crate::ui::events::{EventCard, FilterBar};
use crate::ui::header::SiteHeader;

/// Events per page in the browse grid (matches the backend default).
const PER_PAGE: u32 = 12;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session();

    let filter = RwSignal::new(EventFilter::default());
    let events = RwSignal::new(Vec::<EventSummary>::new());
    let total = RwSignal::new(0u32);
    let loading = RwSignal::new(true);

    // Refetch whenever the filter changes.
    Effect::new(move |_| {
        let current = filter.get();
        spawn_local(async move {
            loading.set(true);
            if let Ok(response) = api::list_events(&current).await {
                events.set(response.events);
                total.set(response.total);
            }
            loading.set(false);
        });
    });

    // Customers see their tickets once the session settles.
    let tickets = RwSignal::new(Vec::<Ticket>::new());
    Effect::new(move |_| {
        if let SessionState::Authenticated(user) = session.state.get() {
            if Role::parse(&user.role) == Some(Role::Customer) {
                spawn_local(async move {
                    if let Ok(list) = api::my_tickets().await {
                        tickets.set(list);
                    }
                });
            }
        } else {
            tickets.set(Vec::new());
        }
    });

    let page = move || {
        let p = filter.get().page;
        if p == 0 { 1 } else { p }
    };
    let has_next = move || page() * PER_PAGE < total.get();

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader />

            <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Hero
                <section class="text-center py-10">
                    <h1 class="text-4xl font-bold text-theme-primary mb-3">
                        "Find your next event"
                    </h1>
                    <p class="text-theme-secondary max-w-xl mx-auto">
                        "Concerts, talks, games, and everything in between. Browse what's on and grab a ticket in seconds."
                    </p>
                </section>

                // My tickets (customers only)
                <Show when=move || !tickets.get().is_empty()>
                    <section class="mb-10">
                        <h2 class="text-xl font-semibold text-theme-primary mb-4">"Your Tickets"</h2>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                            {move || {
                                tickets.get().into_iter().map(|ticket| {
                                    view! { <TicketCard ticket=ticket /> }
                                }).collect_view()
                            }}
                        </div>
                    </section>
                </Show>

                // Filters
                <section class="mb-6">
                    <FilterBar filter=filter />
                </section>

                // Event grid
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
                            <div class="text-center py-20">
                                <p class="text-theme-secondary">"No events match your filters."</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {events.get().into_iter().map(|event| {
                                    view! { <EventCard event=event /> }
                                }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}

                // Pagination
                <div class="flex items-center justify-center gap-4 mt-8">
                    <button
                        class="px-4 py-2 border border-theme text-theme-primary rounded-lg hover:bg-theme-secondary
                               disabled:opacity-40 disabled:cursor-not-allowed transition-colors"
                        disabled=move || page() <= 1
                        on:click=move |_| filter.update(|f| f.page = f.page.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span class="text-sm text-theme-secondary">
                        {move || format!("Page {}", page())}
                    </span>
                    <button
                        class="px-4 py-2 border border-theme text-theme-primary rounded-lg hover:bg-theme-secondary
                               disabled:opacity-40 disabled:cursor-not-allowed transition-colors"
                        disabled=move || !has_next()
                        on:click=move |_| filter.update(|f| f.page = if f.page == 0 { 2 } else { f.page + 1 })
                    >
                        "Next"
                    </button>
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

/// Compact ticket card for the "Your Tickets" strip.
#[component]
fn TicketCard(ticket: Ticket) -> impl IntoView {
    view! {
        <div class="p-4 bg-theme-secondary border border-theme rounded-lg">
            <p class="font-medium text-theme-primary">{ticket.event_title.clone()}</p>
            <p class="text-sm text-theme-secondary">{ticket.tier.clone()}</p>
            <p class="mt-2 text-xs font-mono text-theme-tertiary">{ticket.code.clone()}</p>
        </div>
    }
}
