//! Upload page

use crate::components::{use_toaster, ProgressBar};
use crate::host::DriverHost;
use leptos::*;
use leptos_router::use_navigate;
use mediscan_core::upload::{accept_attribute, ADVERTISED_MAX_BYTES};
use mediscan_core::{ProgressDriver, ReportType, Route, SelectedFile, UploadProgress, UploadSelection};
use web_sys::HtmlInputElement;

#[component]
pub fn UploadPage() -> impl IntoView {
    let (selection, set_selection) = create_signal(UploadSelection::default());
    let (progress, set_progress) = create_signal(UploadProgress::default());

    let navigate = use_navigate();
    let host = DriverHost::mount(
        ProgressDriver::default(),
        set_progress,
        use_toaster(),
        Callback::new(move |route: Route| navigate(route.path(), Default::default())),
    );

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let selected = SelectedFile::new(file.name(), file.size() as u64, file.type_());
            tracing::debug!(name = %selected.name, size = selected.size, "file selected");
            set_selection.update(|s| s.select_file(selected));
        }
    };

    let on_analyze = move |_: leptos::ev::MouseEvent| selection.with_untracked(|s| host.start(s));

    view! {
        <div class="bg-gradient-to-b from-indigo-50 to-white py-12">
            <div class="container mx-auto px-4 max-w-4xl">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"Upload Medical Report"</h1>
                    <p class="text-lg text-gray-600">
                        "Select your report type and upload for AI-powered analysis"
                    </p>
                </div>

                // Report Type Selection
                <div class="bg-white rounded-xl shadow-lg p-8 mb-8">
                    <h2 class="text-2xl font-semibold mb-6">"Select Report Type"</h2>
                    <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                        {ReportType::ALL.into_iter().map(|report_type| {
                            let selected = move || selection.with(|s| s.report_type == Some(report_type));
                            view! {
                                <button
                                    class=move || if selected() {
                                        "p-4 rounded-lg border-2 transition hover:scale-105 border-indigo-600 bg-indigo-50 shadow-md"
                                    } else {
                                        "p-4 rounded-lg border-2 transition hover:scale-105 border-gray-200 bg-white hover:border-indigo-300"
                                    }
                                    on:click=move |_| set_selection.update(|s| s.select_type(report_type))
                                >
                                    <div class=format!("text-3xl text-center mb-2 {}", report_type.accent())>
                                        {report_type.icon()}
                                    </div>
                                    <p class="text-sm font-medium text-center">{report_type.name()}</p>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                // File Upload
                <div class="bg-white rounded-xl shadow-lg p-8 mb-8">
                    <h2 class="text-2xl font-semibold mb-6">"Upload File"</h2>

                    <div class="border-2 border-dashed border-gray-300 rounded-lg p-12 text-center hover:border-indigo-500 transition">
                        <input
                            type="file"
                            accept=accept_attribute()
                            class="hidden"
                            id="file-upload"
                            on:change=on_file_change
                        />
                        <label for="file-upload" class="cursor-pointer">
                            <div class="text-6xl mb-4 text-gray-400">"⬆"</div>
                            <p class="text-lg font-medium mb-2">
                                {move || selection.with(|s| match &s.file {
                                    Some(file) => file.name.clone(),
                                    None => "Click to upload or drag and drop".to_string(),
                                })}
                            </p>
                            <p class="text-sm text-gray-500">
                                {format!(
                                    "Supported formats: PDF, JPG, PNG (Max {}MB)",
                                    ADVERTISED_MAX_BYTES / 1024 / 1024
                                )}
                            </p>
                        </label>
                    </div>

                    {move || selection.with(|s| s.file.clone()).map(|file| view! { <FileReady file=file/> })}
                </div>

                // Analyze Button & Progress
                <div class="bg-white rounded-xl shadow-lg p-8">
                    <Show
                        when=move || progress.get().is_uploading
                        fallback=move || view! {
                            <button
                                class="w-full py-4 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed text-white font-semibold rounded-lg shadow-md transition"
                                disabled=move || !selection.with(|s| s.is_complete())
                                on:click=on_analyze
                            >
                                "⬆ Analyze Report"
                            </button>
                        }
                    >
                        <div class="space-y-4">
                            <div class="flex items-center justify-between text-sm font-medium">
                                <span>"Analyzing report..."</span>
                                <span>{move || progress.get().percent} "%"</span>
                            </div>
                            <ProgressBar value=move || progress.get().percent/>
                            <p class="text-sm text-gray-500 text-center">
                                "AI is processing your medical report"
                            </p>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FileReady(file: SelectedFile) -> impl IntoView {
    let advisory = if !file.is_supported_format() {
        Some("This file type may not be supported")
    } else if file.exceeds_advertised_limit() {
        Some("This file is larger than the advertised 10MB limit")
    } else {
        None
    };

    view! {
        <div class="mt-4 p-4 bg-green-50 border border-green-200 rounded-lg flex items-center gap-2">
            <span class="text-green-600">"✓"</span>
            <span class="text-green-700 font-medium">"File ready: " {file.name.clone()}</span>
            <span class="text-green-600 text-sm ml-auto">{file.display_size()}</span>
        </div>
        {advisory.map(|text| view! {
            <p class="mt-2 text-sm text-yellow-700">{text}</p>
        })}
    }
}
