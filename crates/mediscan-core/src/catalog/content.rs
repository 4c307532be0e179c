//! Marketing copy for the home and about pages

use serde::Serialize;

pub const PRODUCT_NAME: &str = "MediScan AI";
pub const CONTACT_EMAIL: &str = "contact@mediscan.ai";

/// Icon, title and description shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Blurb {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedReport {
    pub icon: &'static str,
    pub name: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechColumn {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static HOME_FEATURES: [Blurb; 3] = [
    Blurb {
        icon: "🧠",
        title: "AI-Powered Analysis",
        description: "Advanced machine learning algorithms analyze your medical reports with high accuracy",
    },
    Blurb {
        icon: "🛡️",
        title: "Blockchain Security",
        description: "Your medical data is encrypted and secured using blockchain technology",
    },
    Blurb {
        icon: "📈",
        title: "Multi-Report Support",
        description: "Supports MRI, CT, Ultrasound, Endoscopy, and Blood Test reports",
    },
];

pub static HOME_REPORTS: [SupportedReport; 4] = [
    SupportedReport { icon: "🧠", name: "MRI Scans", accent: "text-indigo-600" },
    SupportedReport { icon: "📈", name: "CT Scans", accent: "text-cyan-600" },
    SupportedReport { icon: "🔬", name: "Blood Tests", accent: "text-green-600" },
    SupportedReport { icon: "📄", name: "Endoscopy", accent: "text-yellow-600" },
];

pub static ABOUT_FEATURES: [Blurb; 3] = [
    Blurb {
        icon: "🧠",
        title: "Advanced AI Technology",
        description: "Our deep learning models are trained on millions of medical images and reports, \
enabling accurate detection of abnormalities across various diagnostic modalities.",
    },
    Blurb {
        icon: "🛡️",
        title: "Blockchain Security",
        description: "Medical data is encrypted and stored on a distributed blockchain network, \
ensuring tamper-proof records and patient privacy protection.",
    },
    Blurb {
        icon: "⚡",
        title: "Instant Analysis",
        description: "Get preliminary results in seconds, helping healthcare providers make faster, \
more informed decisions.",
    },
];

pub static ABOUT_VALUES: [Blurb; 3] = [
    Blurb {
        icon: "🎯",
        title: "Our Mission",
        description: "To democratize access to advanced medical diagnostics through AI technology \
while maintaining the highest standards of data security.",
    },
    Blurb {
        icon: "🏆",
        title: "Our Vision",
        description: "A world where every patient has access to accurate, affordable, and secure \
medical diagnosis powered by artificial intelligence.",
    },
    Blurb {
        icon: "👥",
        title: "Our Team",
        description: "Built by healthcare professionals, AI researchers, and blockchain experts \
dedicated to improving patient outcomes.",
    },
];

pub static TECH_STACK: [TechColumn; 2] = [
    TechColumn {
        icon: "🧠",
        title: "AI & Machine Learning",
        items: &[
            "Convolutional Neural Networks (CNNs)",
            "Transfer Learning with Medical Datasets",
            "Natural Language Processing for Reports",
            "Computer Vision for Image Analysis",
        ],
    },
    TechColumn {
        icon: "🛡️",
        title: "Blockchain & Security",
        items: &[
            "End-to-End Encryption",
            "Distributed Ledger Technology",
            "HIPAA Compliant Architecture",
            "Immutable Audit Trails",
        ],
    },
];

pub static FOOTER_LINKS: [ExternalLink; 3] = [
    ExternalLink { label: "Email", href: "mailto:contact@mediscan.ai", icon: "✉️" },
    ExternalLink { label: "GitHub", href: "https://github.com", icon: "🐙" },
    ExternalLink { label: "LinkedIn", href: "https://linkedin.com", icon: "💼" },
];
