//! Static content tables
//!
//! Report types, findings and the marketing copy are fixed at compile time
//! and shared read-only by every page.

pub mod content;
mod findings;

use serde::{Deserialize, Serialize};

pub use findings::{findings, BLOCKCHAIN_HASH, DOCTORS_NOTE};

/// Diagnostic report modalities offered on the upload page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Mri,
    Ct,
    Ultrasound,
    Endoscopy,
    #[serde(rename = "blood")]
    BloodTest,
}

impl ReportType {
    /// Display order on the upload page
    pub const ALL: [ReportType; 5] = [
        ReportType::Mri,
        ReportType::Ct,
        ReportType::Ultrasound,
        ReportType::Endoscopy,
        ReportType::BloodTest,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportType::Mri => "mri",
            ReportType::Ct => "ct",
            ReportType::Ultrasound => "ultrasound",
            ReportType::Endoscopy => "endoscopy",
            ReportType::BloodTest => "blood",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportType::Mri => "MRI Scan",
            ReportType::Ct => "CT Scan",
            ReportType::Ultrasound => "Ultrasound",
            ReportType::Endoscopy => "Endoscopy",
            ReportType::BloodTest => "Blood Test",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReportType::Mri => "🧠",
            ReportType::Ct => "📈",
            ReportType::Ultrasound => "📷",
            ReportType::Endoscopy => "📄",
            ReportType::BloodTest => "🔬",
        }
    }

    /// Text colour class for the icon
    pub fn accent(&self) -> &'static str {
        match self {
            ReportType::Mri => "text-indigo-600",
            ReportType::Ct => "text-cyan-600",
            ReportType::Ultrasound => "text-green-600",
            ReportType::Endoscopy => "text-yellow-600",
            ReportType::BloodTest => "text-red-600",
        }
    }

    pub fn from_id(id: &str) -> Option<ReportType> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Severity of a finding. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Badge tone used by the results cards
    pub fn tone(&self) -> &'static str {
        match self {
            Severity::High => "destructive",
            Severity::Medium => "warning",
            Severity::Low => "success",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::High => "⚠️",
            Severity::Medium => "📈",
            Severity::Low => "✅",
        }
    }

    /// (background, text) classes
    pub fn classes(&self) -> (&'static str, &'static str) {
        match self {
            Severity::High => ("bg-red-100", "text-red-800"),
            Severity::Medium => ("bg-yellow-100", "text-yellow-800"),
            Severity::Low => ("bg-green-100", "text-green-800"),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

/// A pre-authored finding shown on the results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingRecord {
    pub id: u32,
    pub title: &'static str,
    pub finding: &'static str,
    pub description: &'static str,
    /// Percentage, 0-100
    pub confidence: u8,
    pub severity: Severity,
    pub recommendation: &'static str,
}
