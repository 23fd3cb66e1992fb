//! Management table of events for the admin and organizer dashboards.

use leptos::prelude::*;
use leptos_router::components::A;
use uuid::Uuid;

use crate::core::events::{EventSummary, format_when};

/// Table of events with a delete action per row.
#[component]
pub fn EventTable(
    events: RwSignal<Vec<EventSummary>>,
    #[prop(into)] on_delete: Callback<Uuid>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto border border-theme rounded-lg">
            <table class="w-full text-sm">
                <thead>
                    <tr class="bg-theme-secondary text-left text-theme-tertiary">
                        <th class="px-4 py-3 font-medium">"Event"</th>
                        <th class="px-4 py-3 font-medium">"When"</th>
                        <th class="px-4 py-3 font-medium">"Where"</th>
                        <th class="px-4 py-3 font-medium">"Category"</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        events.get().into_iter().map(|event| {
                            let id = event.id;
                            let href = format!("/events/{id}");
                            view! {
                                <tr class="border-t border-theme">
                                    <td class="px-4 py-3">
                                        <A href=href attr:class="text-theme-primary font-medium hover:text-accent-primary">
                                            {event.title.clone()}
                                        </A>
                                    </td>
                                    <td class="px-4 py-3 text-theme-secondary">{format_when(&event.starts_at)}</td>
                                    <td class="px-4 py-3 text-theme-secondary">
                                        {format!("{}, {}", event.venue, event.city)}
                                    </td>
                                    <td class="px-4 py-3 text-theme-secondary capitalize">{event.category.clone()}</td>
                                    <td class="px-4 py-3 text-right whitespace-nowrap">
                                        <A
                                            href=format!("/organizer/edit/{id}")
                                            attr:class="px-2 py-1 text-xs text-theme-secondary hover:text-theme-primary"
                                        >
                                            "Edit"
                                        </A>
                                        <button
                                            class="px-2 py-1 text-xs text-red-500 hover:bg-red-500/10 rounded transition-colors"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
