//! User profile page component
//!
//! View and edit profile fields. Updates go through `PUT /api/users`; an
//! entered age is also cached per user for the merge fallback.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::session::{Role, UpdateProfileRequest, context, use_session};
use crate::ui::header::SiteHeader;
use crate::ui::notifications::use_notifications;

/// Profile page component
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();

    // Editing state
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let seeded = RwSignal::new(false);

    // Seed the form once the session user is available.
    Effect::new(move |_| {
        if seeded.get_untracked() {
            return;
        }
        if let Some(user) = session.user() {
            full_name.set(user.full_name.clone());
            phone.set(user.phone.clone().unwrap_or_default());
            age.set(user.age.map(|a| a.to_string()).unwrap_or_default());
            seeded.set(true);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_val = full_name.get().trim().to_string();
        if name_val.is_empty() {
            notifications.error("Name cannot be empty.");
            return;
        }
        let age_val = age.get();
        let parsed_age = if age_val.trim().is_empty() {
            None
        } else {
            match age_val.trim().parse::<u32>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    notifications.error("Age must be a number.");
                    return;
                }
            }
        };

        let request = UpdateProfileRequest {
            full_name: name_val,
            phone: (!phone.get().trim().is_empty()).then(|| phone.get().trim().to_string()),
            age: parsed_age,
        };

        saving.set(true);
        spawn_local(async move {
            if context::update_profile(session, &request).await.is_ok() {
                notifications.success("Profile updated.");
            }
            saving.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-theme-primary">
            <SiteHeader />

            <main class="max-w-2xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-theme-primary mb-6">"Your Profile"</h1>

                {move || {
                    session.user().map(|user| {
                        let role_label = Role::parse(&user.role)
                            .map(|role| role.display_name())
                            .unwrap_or("Member");
                        view! {
                            <div class="mb-6 p-4 bg-theme-secondary border border-theme rounded-lg">
                                <p class="text-theme-primary font-medium">{user.email.clone()}</p>
                                <p class="text-sm text-theme-tertiary">{role_label}</p>
                            </div>
                        }
                    })
                }}

                <form on:submit=on_save class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-theme-primary mb-1">"Full Name"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                                   focus:outline-none focus:ring-2 focus:ring-accent-primary"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-theme-primary mb-1">"Phone"</label>
                            <input
                                type="tel"
                                placeholder="+31 6 1234 5678"
                                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                                       focus:outline-none focus:ring-2 focus:ring-accent-primary"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-theme-primary mb-1">"Age"</label>
                            <input
                                type="text"
                                inputmode="numeric"
                                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                                       focus:outline-none focus:ring-2 focus:ring-accent-primary"
                                prop:value=move || age.get()
                                on:input=move |ev| age.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-6 py-2 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg
                               disabled:opacity-60 disabled:cursor-not-allowed transition-colors"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
