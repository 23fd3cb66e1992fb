//! Event detail page component
//!
//! Full event record with its ticket tiers. Signed-in users can buy a
//! ticket; everyone else is pointed at the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use uuid::Uuid;

use crate::core::events::{EventDetail, TicketTier, api, format_price, format_when};
use crate::core::session::use_session;
use crate::ui::header::SiteHeader;
use crate::ui::notifications::use_notifications;

/// Event detail page component
#[component]
pub fn EventDetailPage() -> impl IntoView {
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
            // A missing id 404s; the gateway turns that into navigation.
            if let Ok(detail) = api::fetch_event(id).await {
                event.set(Some(detail));
            }
            loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-theme-primary">
            <SiteHeader />

            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="flex items-center justify-center py-20">
                                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary"></div>
                            </div>
                        }
                        .into_any();
                    }
                    match event.get() {
                        Some(detail) => view! { <EventBody detail=detail /> }.into_any(),
                        None => view! {
                            <div class="text-center py-20">
                                <p class="text-theme-secondary">"This event could not be loaded."</p>
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn EventBody(detail: EventDetail) -> impl IntoView {
    let when = match detail.ends_at {
        Some(ends_at) => format!("{} to {}", format_when(&detail.starts_at), format_when(&ends_at)),
        None => format_when(&detail.starts_at),
    };

    view! {
        <article>
            <span class="px-2 py-0.5 text-xs font-medium rounded-full bg-accent-primary/10 text-accent-primary capitalize">
                {detail.category.clone()}
            </span>
            <h1 class="mt-3 text-3xl font-bold text-theme-primary">{detail.title.clone()}</h1>
            <p class="mt-2 text-theme-secondary">
                {format!("{} · {}, {}", when, detail.venue, detail.city)}
            </p>

            {detail.description.clone().map(|description| view! {
                <p class="mt-6 text-theme-primary whitespace-pre-line">{description}</p>
            })}

            <section class="mt-10">
                <h2 class="text-xl font-semibold text-theme-primary mb-4">"Tickets"</h2>
                <div class="space-y-3">
                    {if detail.tiers.is_empty() {
                        view! {
                            <p class="text-theme-secondary">"Ticket sales have not opened yet."</p>
                        }
                        .into_any()
                    } else {
                        let event_id = detail.id;
                        detail
                            .tiers
                            .iter()
                            .map(|tier| view! { <TierRow event_id=event_id tier=tier.clone() /> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </section>
        </article>
    }
}

/// One purchasable tier row.
#[component]
fn TierRow(event_id: Uuid, tier: TicketTier) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let buying = RwSignal::new(false);

    let tier_id = tier.id;
    let sold_out = tier.remaining == Some(0);

    let on_buy = move |_| {
        if !session.is_authenticated() {
            let navigate = use_navigate();
            navigate("/login", Default::default());
            return;
        }
        buying.set(true);
        spawn_local(async move {
            if let Ok(ticket) = api::purchase_ticket(event_id, tier_id).await {
                notifications.success(format!("Ticket purchased. Your code is {}", ticket.code));
            }
            buying.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-between p-4 bg-theme-secondary border border-theme rounded-lg">
            <div>
                <p class="font-medium text-theme-primary">{tier.name.clone()}</p>
                <p class="text-sm text-theme-secondary">
                    {match tier.remaining {
                        Some(remaining) => format!("{remaining} left"),
                        None => format!("{} available", tier.quantity),
                    }}
                </p>
            </div>
            <div class="flex items-center gap-4">
                <span class="font-semibold text-theme-primary">{format_price(tier.price_cents)}</span>
                <button
                    class="px-4 py-2 bg-accent-primary hover:bg-accent-primary-hover text-white text-sm font-medium rounded-lg
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    disabled=move || buying.get() || sold_out
                    on:click=on_buy
                >
                    {move || {
                        if sold_out {
                            "Sold Out"
                        } else if buying.get() {
                            "Buying..."
                        } else {
                            "Buy"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
