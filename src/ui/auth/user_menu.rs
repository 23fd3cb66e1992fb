//! User menu component
//!
//! Header widget: sign-in/sign-up links when logged out, the user's name
//! with a dropdown (dashboard, profile, sign out) when logged in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::session::{Role, SessionState, context, landing_path_for, use_session};
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = use_session();

    // Dropdown open state
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        spawn_local(async move {
            context::logout(session).await;
        });
    };

    view! {
        <div class="relative">
            {move || {
                match session.state.get() {
                    SessionState::Loading => {
                        // Loading skeleton
                        view! {
                            <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
                        }
                        .into_any()
                    }
                    SessionState::Unauthenticated => {
                        view! {
                            <div class="flex items-center gap-2">
                                <A
                                    href="/login"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                >
                                    "Sign In"
                                </A>
                                <A
                                    href="/register"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors"
                                >
                                    "Sign Up"
                                </A>
                            </div>
                        }
                        .into_any()
                    }
                    SessionState::Authenticated(user) => {
                        let dashboard = landing_path_for(&user.role);
                        let role_label = Role::parse(&user.role)
                            .map(|role| role.display_name())
                            .unwrap_or("Member");

                        view! {
                            <div class="relative">
                                <button
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-theme-secondary transition-colors"
                                    on:click=move |_| menu_open.update(|open| *open = !*open)
                                >
                                    <div class="w-8 h-8 rounded-full bg-accent-primary text-white flex items-center justify-center text-sm font-semibold">
                                        {user.full_name.chars().next().unwrap_or('?').to_uppercase().to_string()}
                                    </div>
                                    <span class="hidden sm:block text-sm font-medium text-theme-primary max-w-[120px] truncate">
                                        {user.full_name.clone()}
                                    </span>
                                    <Icon name=icons::CHEVRON_DOWN class="w-4 h-4 text-theme-tertiary" />
                                </button>

                                <Show when=move || menu_open.get()>
                                    <div class="absolute right-0 mt-2 w-48 bg-theme-primary border border-theme rounded-lg shadow-lg py-1 z-40">
                                        <div class="px-4 py-2 border-b border-theme">
                                            <p class="text-xs text-theme-tertiary">{role_label}</p>
                                        </div>
                                        {(dashboard != "/").then(|| view! {
                                            <A
                                                href=dashboard
                                                attr:class="block px-4 py-2 text-sm text-theme-primary hover:bg-theme-secondary transition-colors"
                                            >
                                                "Dashboard"
                                            </A>
                                        })}
                                        <A
                                            href="/profile"
                                            attr:class="block px-4 py-2 text-sm text-theme-primary hover:bg-theme-secondary transition-colors"
                                        >
                                            "Profile"
                                        </A>
                                        <button
                                            class="w-full text-left px-4 py-2 text-sm text-red-500 hover:bg-theme-secondary transition-colors"
                                            on:click=handle_logout
                                        >
                                            "Sign Out"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
