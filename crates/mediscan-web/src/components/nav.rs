//! Navigation component

use leptos::*;
use leptos_router::use_location;
use mediscan_core::catalog::content::PRODUCT_NAME;
use mediscan_core::Route;

#[component]
pub fn Nav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);
    let pathname = use_location().pathname;
    let is_active = move |route: Route| Route::from_path(&pathname.get()) == Some(route);
    let link_class = move |route: Route, base: &'static str| {
        if is_active(route) {
            format!("{} bg-indigo-600 text-white", base)
        } else {
            format!("{} text-gray-600 hover:bg-gray-100 hover:text-gray-900", base)
        }
    };

    view! {
        <nav class="bg-white/80 backdrop-blur-lg border-b border-gray-200 shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <a href="/" class="flex items-center space-x-2">
                        <span class="p-2 bg-gradient-to-br from-indigo-600 to-cyan-500 rounded-lg text-xl">"🧠"</span>
                        <span class="text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-cyan-500">
                            {PRODUCT_NAME}
                        </span>
                    </a>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-1">
                        {Route::ALL.into_iter().map(move |route| view! {
                            <a
                                href=route.path()
                                class=move || link_class(route, "px-4 py-2 rounded-lg font-medium transition")
                            >
                                {route.label()}
                            </a>
                        }).collect_view()}
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg text-gray-600 hover:bg-gray-100"
                        on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                    >
                        <Show when=move || mobile_open.get() fallback=|| "☰">
                            "✕"
                        </Show>
                    </button>
                </div>

                // Mobile menu
                <Show when=move || mobile_open.get()>
                    <div class="md:hidden py-4 space-y-2">
                        {Route::ALL.into_iter().map(move |route| view! {
                            <a
                                href=route.path()
                                class=move || link_class(route, "block px-4 py-2 rounded-lg")
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {route.label()}
                            </a>
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
