//! Registration form component
//!
//! Creates an account (customer or organizer) against the register endpoint
//! and hands off to the login page on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::session::{RegisterRequest, context, use_session};
use crate::ui::notifications::use_notifications;

/// Registration form component
#[component]
pub fn RegisterForm() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();

    // Form state
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let organizer = RwSignal::new(false);

    let form_error = RwSignal::new(None::<String>);

    let validate = move || {
        if full_name.get().trim().is_empty() {
            form_error.set(Some("Name is required".to_string()));
            return false;
        }
        let email_val = email.get();
        if !email_val.contains('@') || !email_val.contains('.') {
            form_error.set(Some("Please enter a valid email".to_string()));
            return false;
        }
        if password.get().len() < 8 {
            form_error.set(Some("Password must be at least 8 characters".to_string()));
            return false;
        }
        if password.get() != confirm.get() {
            form_error.set(Some("Passwords do not match".to_string()));
            return false;
        }
        form_error.set(None);
        true
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        session.clear_error();
        if !validate() {
            return;
        }

        let request = RegisterRequest {
            email: email.get(),
            password: password.get(),
            full_name: full_name.get().trim().to_string(),
            role: if organizer.get() {
                "organizer".to_string()
            } else {
                "customer".to_string()
            },
        };

        spawn_local(async move {
            if context::register(session, &request).await.is_ok() {
                notifications.success("Account created. Sign in to continue.");
                let navigate = use_navigate();
                navigate("/login", Default::default());
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Create Account"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Join to buy tickets or organize your own events"
                </p>
            </div>

            {move || {
                form_error.get().or_else(|| session.error.get()).map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                            <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                        </div>
                    }
                })
            }}

            <div>
                <label for="full_name" class="block text-sm font-medium text-theme-primary mb-1">
                    "Full Name"
                </label>
                <input
                    type="text"
                    id="full_name"
                    name="full_name"
                    autocomplete="name"
                    placeholder="Ada Lovelace"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
            </div>

            <div>
                <label for="email" class="block text-sm font-medium text-theme-primary mb-1">
                    "Email"
                </label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Password"
                    </label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="new-password"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary
                               focus:border-transparent transition-colors"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="confirm" class="block text-sm font-medium text-theme-primary mb-1">
                        "Confirm Password"
                    </label>
                    <input
                        type="password"
                        id="confirm"
                        name="confirm"
                        autocomplete="new-password"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary
                               focus:border-transparent transition-colors"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <label class="flex items-center gap-2 text-sm text-theme-secondary">
                <input
                    type="checkbox"
                    class="rounded border-theme"
                    prop:checked=move || organizer.get()
                    on:change=move |ev| organizer.set(event_target_checked(&ev))
                />
                "I want to organize events"
            </label>

            <button
                type="submit"
                disabled=move || session.loading.get()
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       disabled:opacity-60 disabled:cursor-not-allowed
                       text-white font-medium rounded-lg transition-colors"
            >
                {move || if session.loading.get() { "Creating Account..." } else { "Sign Up" }}
            </button>

            <p class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <A href="/login" attr:class="text-accent-primary hover:underline font-medium">
                    "Sign In"
                </A>
            </p>
        </form>
    }
}
