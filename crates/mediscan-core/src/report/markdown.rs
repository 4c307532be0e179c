//! Markdown report generation

use crate::catalog::{content::PRODUCT_NAME, FindingRecord, BLOCKCHAIN_HASH, DOCTORS_NOTE};

pub fn generate(findings: &[FindingRecord]) -> String {
    let mut out = format!("# {} Analysis Results\n\n", PRODUCT_NAME);

    for finding in findings {
        out.push_str(&format!("## {}: {}\n\n", finding.title, finding.finding));
        out.push_str(&format!(
            "- **Severity:** {}\n- **Confidence:** {}%\n\n",
            finding.severity, finding.confidence
        ));
        out.push_str(&format!("{}\n\n", finding.description));
        out.push_str(&format!("> AI Recommendation: {}\n\n", finding.recommendation));
    }

    out.push_str(&format!("## Doctor's Note\n\n_{}_\n\n", DOCTORS_NOTE));
    out.push_str(&format!("---\n\nHash: `{}`\n", BLOCKCHAIN_HASH));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::findings;

    #[test]
    fn test_markdown_lists_every_finding() {
        let md = generate(findings());
        assert!(md.starts_with("# MediScan AI Analysis Results"));
        for finding in findings() {
            assert!(md.contains(finding.finding));
            assert!(md.contains(finding.recommendation));
        }
        assert!(md.contains("**Confidence:** 92%"));
        assert!(md.contains("**Severity:** High"));
    }

    #[test]
    fn test_markdown_ends_with_note_and_hash() {
        let md = generate(findings());
        let note = md.find("## Doctor's Note").unwrap();
        let hash = md.find(BLOCKCHAIN_HASH).unwrap();
        assert!(note < hash);
        assert!(md.ends_with(&format!("Hash: `{}`\n", BLOCKCHAIN_HASH)));
    }
}
