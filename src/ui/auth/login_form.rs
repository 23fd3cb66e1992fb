//! Login form component
//!
//! Email/password form. On success the session store persists the token and
//! navigates to the role's landing page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::session::{context, use_session};

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_email = move || {
        let value = email.get();
        if value.is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !value.contains('@') || !value.contains('.') {
            email_error.set(Some("Please enter a valid email".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_password = move || {
        let value = password.get();
        if value.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        session.clear_error();

        let email_valid = validate_email();
        let password_valid = validate_password();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get();
        let password_val = password.get();

        spawn_local(async move {
            // Role-based navigation happens inside the session store.
            let _ = context::login(session, &email_val, &password_val).await;
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Welcome Back"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to your account to continue"
                </p>
            </div>

            // Global error message
            {move || {
                session.error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                            <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                        </div>
                    }
                })
            }}

            // Email field
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
                    class:border-red-500=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| { validate_email(); }
                />
                {move || {
                    email_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            // Password field
            <div>
                <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                    "Password"
                </label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    autocomplete="current-password"
                    placeholder="........"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || password_error.get().is_some()
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        password_error.set(None);
                    }
                    on:blur=move |_| { validate_password(); }
                />
                {move || {
                    password_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            // Submit
            <button
                type="submit"
                disabled=move || session.loading.get()
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       disabled:opacity-60 disabled:cursor-not-allowed
                       text-white font-medium rounded-lg transition-colors"
            >
                {move || if session.loading.get() { "Signing In..." } else { "Sign In" }}
            </button>

            <p class="text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <A href="/register" attr:class="text-accent-primary hover:underline font-medium">
                    "Sign Up"
                </A>
            </p>
        </form>
    }
}
