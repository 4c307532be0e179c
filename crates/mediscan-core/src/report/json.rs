//! JSON report generation

use crate::catalog::{FindingRecord, BLOCKCHAIN_HASH};
use crate::{CoreError, CoreResult};
use serde::Serialize;

#[derive(Serialize)]
struct FindingsReport<'a> {
    findings: &'a [FindingRecord],
    blockchain_hash: &'static str,
}

pub fn generate(findings: &[FindingRecord]) -> CoreResult<String> {
    let report = FindingsReport {
        findings,
        blockchain_hash: BLOCKCHAIN_HASH,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| CoreError::Serialization(format!("JSON serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::findings;

    #[test]
    fn test_json_report_shape() {
        let json = generate(findings()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["findings"].as_array().unwrap().len(), 3);
        assert_eq!(value["findings"][0]["severity"], "high");
        assert_eq!(value["findings"][1]["confidence"], 78);
        assert_eq!(value["blockchain_hash"], BLOCKCHAIN_HASH);
    }
}
