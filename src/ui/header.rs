//! Shared site header: brand, theme toggle, user menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Header shown on every page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <header class="border-b border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <Icon name=icons::TICKET class="w-5 h-5 text-white" />
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"Eventra"</span>
                    </A>

                    <div class="flex items-center gap-2">
                        // Theme toggle
                        <button
                            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                            on:click=move |_| theme.toggle()
                            title="Toggle theme"
                        >
                            {move || if theme.is_dark() { "☀" } else { "☾" }}
                        </button>

                        <UserMenu />
                    </div>
                </div>
            </div>
        </header>
    }
}
