//! Event card for the browse grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::events::{EventSummary, format_price, format_when};
use crate::ui::icon::{Icon, icons};

/// One event in the browse grid, linking to its detail page.
#[component]
pub fn EventCard(event: EventSummary) -> impl IntoView {
    let href = format!("/events/{}", event.id);
    let price_label = event
        .price_from_cents
        .map(|cents| format!("From {}", format_price(cents)))
        .unwrap_or_else(|| "Free".to_string());

    view! {
        <A
            href=href
            attr:class="block bg-theme-secondary border border-theme rounded-xl p-5 hover:border-accent-primary transition-colors"
        >
            <div class="flex items-center justify-between mb-3">
                <span class="px-2 py-0.5 text-xs font-medium rounded-full bg-accent-primary/10 text-accent-primary capitalize">
                    {event.category.clone()}
                </span>
                {event.sold_out.then(|| view! {
                    <span class="px-2 py-0.5 text-xs font-medium rounded-full bg-red-500/10 text-red-500">
                        "Sold Out"
                    </span>
                })}
            </div>

            <h3 class="text-lg font-semibold text-theme-primary mb-2 line-clamp-2">
                {event.title.clone()}
            </h3>

            <div class="space-y-1 text-sm text-theme-secondary">
                <div class="flex items-center gap-2">
                    <Icon name=icons::CALENDAR class="w-4 h-4" />
                    <span>{format_when(&event.starts_at)}</span>
                </div>
                <div class="flex items-center gap-2">
                    <Icon name=icons::LOCATION class="w-4 h-4" />
                    <span>{format!("{}, {}", event.venue, event.city)}</span>
                </div>
            </div>

            <p class="mt-3 text-sm font-medium text-theme-primary">{price_label}</p>
        </A>
    }
}
