//! Home page

use leptos::*;
use mediscan_core::catalog::content::{HOME_FEATURES, HOME_REPORTS, PRODUCT_NAME};
use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-indigo-50 via-white to-cyan-50">
                <div class="container mx-auto px-4 py-20">
                    <div class="max-w-3xl space-y-8">
                        <h1 class="text-5xl md:text-6xl font-bold leading-tight">
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-cyan-500">
                                "Smart Diagnosis."
                            </span>
                            <br/>
                            <span class="text-gray-900">"Secure Data."</span>
                        </h1>
                        <p class="text-lg text-gray-600 max-w-xl">
                            "Our AI-powered system analyzes MRI, CT, Ultrasound, Endoscopy, and Blood Test reports "
                            "with precision, while blockchain technology ensures your medical data remains secure and private."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <a href="/upload" class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg shadow-md transition text-center">
                                "⬆ Upload Report"
                            </a>
                            <a href="/about" class="px-8 py-4 bg-white hover:bg-gray-50 text-gray-900 font-semibold rounded-lg border border-gray-300 transition text-center">
                                "Learn More"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Features
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Why Choose " {PRODUCT_NAME} "?"
                        </h2>
                        <p class="text-gray-600 max-w-2xl mx-auto">
                            "Combining cutting-edge AI technology with blockchain security for reliable medical diagnosis"
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {HOME_FEATURES.iter().map(|blurb| view! { <FeatureCard blurb=*blurb/> }).collect_view()}
                    </div>
                </div>
            </section>

            // Supported Reports
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Supported Report Types"</h2>
                        <p class="text-gray-600">"Advanced AI analysis for various medical diagnostic reports"</p>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-4xl mx-auto">
                        {HOME_REPORTS.iter().map(|report| view! { <ReportCard report=*report/> }).collect_view()}
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-20 bg-gradient-to-r from-indigo-600 to-cyan-500 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Ready to Get Started?"</h2>
                    <p class="text-white/90 mb-8 max-w-2xl mx-auto">
                        "Upload your medical report now and get instant AI-powered analysis with blockchain-verified security"
                    </p>
                    <a href="/upload" class="inline-block px-8 py-4 bg-white text-indigo-700 font-semibold rounded-lg shadow-lg hover:scale-105 transition">
                        "⬆ Upload Your Report"
                    </a>
                </div>
            </section>
        </div>
    }
}
