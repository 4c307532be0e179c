//! About page

use leptos::*;
use mediscan_core::catalog::content::{ABOUT_FEATURES, ABOUT_VALUES, PRODUCT_NAME, TECH_STACK};
use crate::components::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-b from-indigo-50 to-white py-12">
            <div class="container mx-auto px-4 max-w-6xl">
                <div class="text-center mb-16">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"About " {PRODUCT_NAME}</h1>
                    <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                        "Revolutionizing medical diagnostics through the power of artificial intelligence and blockchain technology"
                    </p>
                </div>

                // How it works
                <div class="bg-white rounded-xl shadow-lg p-8 md:p-12 mb-12">
                    <div class="flex items-start gap-4">
                        <div class="p-3 bg-gradient-to-br from-indigo-600 to-cyan-500 rounded-lg text-3xl">"🧠"</div>
                        <div>
                            <h2 class="text-3xl font-bold mb-4">"How It Works"</h2>
                            <p class="text-lg text-gray-600 leading-relaxed mb-4">
                                {PRODUCT_NAME} " combines cutting-edge artificial intelligence with blockchain technology to provide "
                                "secure, accurate, and instant medical report analysis. Our system supports multiple diagnostic "
                                "modalities including MRI scans, CT scans, ultrasounds, endoscopy images, and blood test reports."
                            </p>
                            <p class="text-lg text-gray-600 leading-relaxed">
                                "When you upload a medical report, our AI algorithms analyze the data using deep learning models "
                                "trained on extensive medical datasets. The results are then encrypted and stored on a blockchain "
                                "network, ensuring your medical data remains private, secure, and tamper-proof."
                            </p>
                        </div>
                    </div>
                </div>

                <div class="mb-16">
                    <h2 class="text-3xl font-bold text-center mb-8">"Key Features"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {ABOUT_FEATURES.iter().map(|blurb| view! { <FeatureCard blurb=*blurb/> }).collect_view()}
                    </div>
                </div>

                <div class="mb-16">
                    <h2 class="text-3xl font-bold text-center mb-8">"Our Values"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {ABOUT_VALUES.iter().map(|blurb| view! { <ValueCard blurb=*blurb/> }).collect_view()}
                    </div>
                </div>

                <div class="bg-indigo-50 border border-indigo-200 rounded-xl shadow-lg p-8 md:p-12">
                    <h2 class="text-3xl font-bold mb-6 text-center">"Technology Stack"</h2>
                    <div class="grid md:grid-cols-2 gap-6">
                        {TECH_STACK.iter().map(|column| view! { <TechList column=*column/> }).collect_view()}
                    </div>
                </div>

                <div class="mt-16 text-center">
                    <div class="inline-block bg-white rounded-xl shadow p-8">
                        <h2 class="text-2xl font-bold mb-4">"Developed By"</h2>
                        <p class="text-lg text-gray-600 mb-2">"The " {PRODUCT_NAME} " Team"</p>
                        <p class="text-sm text-gray-500">
                            "Healthcare Professionals • AI Researchers • Blockchain Experts"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
