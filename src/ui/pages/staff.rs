//! Staff dashboard page component
//!
//! Ticket check-in by code: enter or scan a code, see the verdict, move on
//! to the next attendee.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::events::{CheckinResult, api};
use crate::ui::header::SiteHeader;
use crate::ui::notifications::use_notifications;

/// Staff dashboard page component
#[component]
pub fn StaffDashboardPage() -> impl IntoView {
    let notifications = use_notifications();

    let code = RwSignal::new(String::new());
    let checking = RwSignal::new(false);
    let last_result = RwSignal::new(None::<CheckinResult>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let code_val = code.get().trim().to_string();
        if code_val.is_empty() {
            notifications.error("Enter a ticket code first.");
            return;
        }

        checking.set(true);
        spawn_local(async move {
            match api::check_in(&code_val).await {
                Ok(result) => {
                    last_result.set(Some(result));
                    code.set(String::new());
                }
                Err(_) => {
                    // Gateway already surfaced the failure.
                    last_result.set(None);
                }
            }
            checking.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-theme-primary">
            <SiteHeader />

            <main class="max-w-lg mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-theme-primary mb-2">"Check-In"</h1>
                <p class="text-theme-secondary mb-6">
                    "Enter the code on the attendee's ticket to validate it at the door."
                </p>

                <form on:submit=on_submit class="flex gap-3">
                    <input
                        type="text"
                        placeholder="TKT-XXXX-XXXX"
                        autocomplete="off"
                        class="flex-1 px-3 py-2 font-mono bg-theme-secondary border border-theme rounded-lg text-theme-primary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        disabled=move || checking.get()
                        class="px-6 py-2 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg
                               disabled:opacity-60 disabled:cursor-not-allowed transition-colors"
                    >
                        {move || if checking.get() { "Checking..." } else { "Check In" }}
                    </button>
                </form>

                {move || {
                    last_result.get().map(|result| {
                        let ok = result.status == "checked_in";
                        let headline = if ok { "Welcome in!" } else { "Not valid" };
                        let detail = match (&result.attendee, &result.event_title) {
                            (Some(attendee), Some(event)) => format!("{attendee} · {event}"),
                            (Some(attendee), None) => attendee.clone(),
                            (None, Some(event)) => event.clone(),
                            (None, None) => format!("Status: {}", result.status),
                        };
                        let container_class = format!(
                            "mt-6 p-4 rounded-lg border {}",
                            if ok {
                                "border-green-500/40 bg-green-500/10"
                            } else {
                                "border-red-500/40 bg-red-500/10"
                            }
                        );
                        view! {
                            <div class=container_class>
                                <p class="font-semibold text-theme-primary">{headline}</p>
                                <p class="text-sm text-theme-secondary">{detail}</p>
                            </div>
                        }
                    })
                }}
            </main>
        </div>
    }
}
