//! Progress bar

use leptos::*;

#[component]
pub fn ProgressBar(value: impl Fn() -> u8 + 'static) -> impl IntoView {
    let width = move || format!("width: {}%", value().min(100));

    view! {
        <div class="w-full h-3 bg-gray-200 rounded-full overflow-hidden">
            <div class="h-full bg-indigo-600 transition-all duration-200" style=width></div>
        </div>
    }
}
