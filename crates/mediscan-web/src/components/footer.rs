//! Site footer

use leptos::*;
use mediscan_core::catalog::content::{FOOTER_LINKS, PRODUCT_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 mt-auto">
            <div class="container mx-auto px-4 py-8">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-gray-500">
                        "© 2025 " {PRODUCT_NAME} ". Made with " <span class="text-red-500">"♥"</span> " for better healthcare."
                    </p>
                    <div class="flex items-center gap-4">
                        {FOOTER_LINKS.iter().map(|link| {
                            let external = link.href.starts_with("http");
                            view! {
                                <a
                                    href=link.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    aria-label=link.label
                                    class="p-2 hover:bg-gray-100 rounded-lg transition hover:scale-110"
                                >
                                    {link.icon}
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
