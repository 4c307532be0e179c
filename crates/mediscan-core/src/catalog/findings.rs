//! Findings shown on the results page

use super::{FindingRecord, Severity};

static FINDINGS: [FindingRecord; 3] = [
    FindingRecord {
        id: 1,
        title: "Primary Diagnosis",
        finding: "Possible Abnormality Detected",
        description: "AI analysis has identified a potential tumor in the frontal lobe region",
        confidence: 92,
        severity: Severity::High,
        recommendation: "Immediate consultation with a neurologist recommended",
    },
    FindingRecord {
        id: 2,
        title: "Secondary Observations",
        finding: "Minor Inflammation",
        description: "Slight inflammation detected in surrounding tissue",
        confidence: 78,
        severity: Severity::Medium,
        recommendation: "Follow-up scan recommended in 3 months",
    },
    FindingRecord {
        id: 3,
        title: "General Assessment",
        finding: "Normal Brain Structure",
        description: "Overall brain structure and anatomy appear normal",
        confidence: 95,
        severity: Severity::Low,
        recommendation: "Regular health checkups advised",
    },
];

pub const BLOCKCHAIN_HASH: &str =
    "0x7d8a9b3c4e5f6a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b";

pub const DOCTORS_NOTE: &str = "Please consult with your healthcare provider to discuss these \
AI-generated findings. This analysis is meant to assist medical professionals and should not \
be used as the sole basis for diagnosis.";

/// The findings table. Identical on every call, whatever was uploaded.
pub fn findings() -> &'static [FindingRecord] {
    &FINDINGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_findings_table() {
        let findings = findings();
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.confidence <= 100));
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[1].severity, Severity::Medium);
        assert_eq!(findings[2].severity, Severity::Low);
    }

    #[test]
    fn test_finding_ids_unique() {
        let ids: HashSet<u32> = findings().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), findings().len());
    }
}
