//! Transient user notifications

use serde::Serialize;
use std::borrow::Cow;

pub const MISSING_SELECTION: &str = "Please select a report type and upload a file";
pub const ANALYSIS_COMPLETE: &str = "Report analyzed successfully!";
pub const REPORT_DOWNLOADED: &str = "Report downloaded successfully";
pub const BLOCKCHAIN_VERIFIED: &str = "Report verified on blockchain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A short, non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: Cow<'static, str>,
}

impl Notification {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Buttons on the results page. Both are cosmetic and always succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultsAction {
    DownloadReport,
    VerifyOnBlockchain,
}

impl ResultsAction {
    pub fn label(&self) -> &'static str {
        match self {
            ResultsAction::DownloadReport => "Download Report",
            ResultsAction::VerifyOnBlockchain => "Verify on Blockchain",
        }
    }

    /// Performs the action, which amounts to producing its notification
    pub fn perform(&self) -> Notification {
        tracing::debug!(action = self.label(), "results action");
        match self {
            ResultsAction::DownloadReport => Notification::success(REPORT_DOWNLOADED),
            ResultsAction::VerifyOnBlockchain => Notification::success(BLOCKCHAIN_VERIFIED),
        }
    }
}
