//! Findings report rendering

pub mod json;
pub mod markdown;

use crate::catalog::FindingRecord;
use crate::{CoreError, CoreResult};
use std::str::FromStr;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
}

impl FromStr for ReportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            other => Err(CoreError::Config(format!("unknown report format: {}", other))),
        }
    }
}

/// Generate report in specified format
pub fn generate_report(findings: &[FindingRecord], format: ReportFormat) -> CoreResult<String> {
    match format {
        ReportFormat::Json => json::generate(findings),
        ReportFormat::Markdown => Ok(markdown::generate(findings)),
    }
}
