//! Results page

use crate::components::{use_toaster, FindingCard};
use leptos::*;
use mediscan_core::catalog::{findings, BLOCKCHAIN_HASH, DOCTORS_NOTE};
use mediscan_core::ResultsAction;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let toaster = use_toaster();
    let perform = move |action: ResultsAction| toaster.push(action.perform());

    view! {
        <div class="bg-gradient-to-b from-indigo-50 to-white py-12">
            <div class="container mx-auto px-4 max-w-5xl">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"Analysis Results"</h1>
                    <p class="text-lg text-gray-600">
                        "AI-powered medical report analysis with blockchain verification"
                    </p>
                </div>

                // Actions
                <div class="flex flex-col sm:flex-row gap-4 mb-8">
                    <button
                        class="flex-1 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg shadow-md transition"
                        on:click=move |_| perform(ResultsAction::DownloadReport)
                    >
                        "⬇ " {ResultsAction::DownloadReport.label()}
                    </button>
                    <button
                        class="flex-1 py-3 bg-white border border-gray-300 hover:bg-gray-50 text-gray-900 font-semibold rounded-lg shadow-sm transition"
                        on:click=move |_| perform(ResultsAction::VerifyOnBlockchain)
                    >
                        "🛡️ " {ResultsAction::VerifyOnBlockchain.label()}
                    </button>
                </div>

                <div class="space-y-6">
                    {findings().iter().map(|finding| view! { <FindingCard finding=finding/> }).collect_view()}
                </div>

                <div class="mt-8 p-6 bg-indigo-50 border border-indigo-200 rounded-xl shadow">
                    <h3 class="text-xl font-semibold mb-3 flex items-center gap-2">
                        <span>"🧠"</span>
                        "Doctor's Note"
                    </h3>
                    <p class="text-gray-600 italic">"\"" {DOCTORS_NOTE} "\""</p>
                </div>

                <div class="mt-6 p-6 bg-white rounded-xl shadow">
                    <div class="flex items-start gap-3">
                        <span class="text-2xl text-green-600">"🛡️"</span>
                        <div class="min-w-0">
                            <h3 class="text-lg font-semibold mb-2">"Blockchain Verified"</h3>
                            <p class="text-sm text-gray-600 mb-2">
                                "This report has been securely stored on the blockchain network"
                            </p>
                            <div class="text-xs font-mono bg-gray-100 p-3 rounded border border-gray-200 overflow-x-auto">
                                "Hash: " {BLOCKCHAIN_HASH}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
