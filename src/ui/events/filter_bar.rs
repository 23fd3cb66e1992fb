//! Browse filter bar: search text, category, and date-from.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::core::events::{CATEGORIES, EventFilter};
use crate::ui::icon::{Icon, icons};

/// Filter controls above the event grid. Writes back into the shared filter
/// signal; the page refetches when it changes. Any change resets paging.
#[component]
pub fn FilterBar(filter: RwSignal<EventFilter>) -> impl IntoView {
    let search_text = RwSignal::new(String::new());

    let apply_search = move || {
        let text = search_text.get().trim().to_string();
        filter.update(|f| {
            f.search = (!text.is_empty()).then_some(text);
            f.page = 1;
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        apply_search();
    };

    view! {
        <form on:submit=on_submit class="flex flex-col sm:flex-row gap-3">
            // Search
            <div class="relative flex-1">
                <div class="absolute left-3 top-1/2 -translate-y-1/2 text-theme-tertiary">
                    <Icon name=icons::SEARCH class="w-4 h-4" />
                </div>
                <input
                    type="text"
                    placeholder="Search events..."
                    class="w-full pl-9 pr-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                    prop:value=move || search_text.get()
                    on:input=move |ev| search_text.set(event_target_value(&ev))
                    on:change=move |_| apply_search()
                />
            </div>

            // Category
            <select
                class="px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| {
                        f.category = (value != "all").then_some(value);
                        f.page = 1;
                    });
                }
            >
                <option value="all">"All categories"</option>
                {CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <option value=*category class="capitalize">{category.to_string()}</option>
                        }
                    })
                    .collect_view()}
            </select>

            // Date from
            <input
                type="date"
                class="px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| {
                        f.from = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
                        f.page = 1;
                    });
                }
            />
        </form>
    }
}
