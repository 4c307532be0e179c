//! Card components

use leptos::*;
use mediscan_core::catalog::content::{Blurb, SupportedReport, TechColumn};
use mediscan_core::{FindingRecord, Severity};

#[component]
pub fn FeatureCard(blurb: Blurb) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 hover:shadow-xl hover:-translate-y-2 transition">
            <div class="p-3 bg-gradient-to-br from-indigo-600 to-cyan-500 rounded-lg w-fit mb-4 text-2xl">
                {blurb.icon}
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{blurb.title}</h3>
            <p class="text-gray-600 leading-relaxed">{blurb.description}</p>
        </div>
    }
}

#[component]
pub fn ValueCard(blurb: Blurb) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6 hover:shadow-lg transition">
            <div class="text-5xl mb-4">{blurb.icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-3">{blurb.title}</h3>
            <p class="text-gray-600 leading-relaxed">{blurb.description}</p>
        </div>
    }
}

#[component]
pub fn ReportCard(report: SupportedReport) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6 text-center hover:shadow-lg hover:scale-105 transition cursor-pointer">
            <div class=format!("text-5xl mb-3 {}", report.accent)>{report.icon}</div>
            <p class="font-medium text-gray-900">{report.name}</p>
        </div>
    }
}

#[component]
pub fn TechList(column: TechColumn) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold mb-3 flex items-center gap-2">
                <span>{column.icon}</span>
                {column.title}
            </h3>
            <ul class="space-y-2 text-gray-600">
                {column.items.iter().map(|item| view! {
                    <li class="flex items-center">
                        <span class="text-indigo-600 mr-2">"•"</span>
                        {*item}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn SeverityBadge(severity: Severity, confidence: u8) -> impl IntoView {
    let (bg, text) = severity.classes();

    view! {
        <span class=format!("px-3 py-1 text-sm font-medium rounded-full w-fit {} {}", bg, text)>
            {confidence} "% Confidence"
        </span>
    }
}

#[component]
pub fn FindingCard(finding: &'static FindingRecord) -> impl IntoView {
    let (bg, _) = finding.severity.classes();

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 hover:shadow-xl transition">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4 mb-4">
                <div class="flex items-start gap-3">
                    <div class=format!("p-2 rounded-lg mt-1 {}", bg)>{finding.severity.icon()}</div>
                    <div>
                        <h3 class="text-xl font-semibold text-gray-900 mb-1">{finding.title}</h3>
                        <p class="text-lg font-medium text-gray-800">{finding.finding}</p>
                    </div>
                </div>
                <SeverityBadge severity=finding.severity confidence=finding.confidence/>
            </div>

            <p class="text-gray-600 mb-4 ml-11">{finding.description}</p>

            <div class="ml-11 p-4 bg-gray-50 rounded-lg border border-gray-200">
                <p class="text-sm font-medium text-gray-900 flex items-start gap-2">
                    <span>"🧠"</span>
                    <span><strong>"AI Recommendation: "</strong>{finding.recommendation}</span>
                </p>
            </div>
        </div>
    }
}
