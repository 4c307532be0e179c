//! Upload selection and the simulated analysis driver

mod driver;

pub use driver::{DriverState, Effect, ProgressDriver, RunId, UploadProgress};

use crate::catalog::ReportType;
use crate::notify::{self, Notification};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extensions the file picker offers
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Advertised upload limit. Shown to the user, never enforced.
pub const ADVERTISED_MAX_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("report type and file must both be selected")]
    MissingSelection,

    #[error("an analysis run is already in progress")]
    AlreadyRunning,

    #[error("the upload view has been torn down")]
    Detached,
}

impl UploadError {
    /// What the user should see, if anything
    pub fn notification(&self) -> Option<Notification> {
        match self {
            UploadError::MissingSelection => Some(Notification::error(notify::MISSING_SELECTION)),
            UploadError::AlreadyRunning | UploadError::Detached => None,
        }
    }
}

/// Metadata of the file the user picked. The bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Lowercased extension, if the name has one
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Build from a bare file name, guessing the MIME type from its extension
    pub fn from_name(name: impl Into<String>, size: u64) -> Self {
        let mut file = Self::new(name, size, "");
        file.mime = match file.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            _ => "application/octet-stream",
        }
        .to_string();
        file
    }

    pub fn is_supported_format(&self) -> bool {
        self.extension()
            .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }

    pub fn exceeds_advertised_limit(&self) -> bool {
        self.size > ADVERTISED_MAX_BYTES
    }

    pub fn display_size(&self) -> String {
        let size = self.size as f64;
        if size >= 1024.0 * 1024.0 {
            format!("{:.1} MB", size / 1024.0 / 1024.0)
        } else if size >= 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else {
            format!("{} B", self.size)
        }
    }
}

/// Value for the file input's `accept` attribute
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// What the user has picked so far on the upload page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSelection {
    pub report_type: Option<ReportType>,
    pub file: Option<SelectedFile>,
}

impl UploadSelection {
    pub fn select_type(&mut self, report_type: ReportType) {
        self.report_type = Some(report_type);
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub fn is_complete(&self) -> bool {
        self.report_type.is_some() && self.file.is_some()
    }

    /// Both selections, or [`UploadError::MissingSelection`]
    pub fn require(&self) -> Result<(ReportType, &SelectedFile), UploadError> {
        match (self.report_type, self.file.as_ref()) {
            (Some(report_type), Some(file)) => Ok((report_type, file)),
            _ => Err(UploadError::MissingSelection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_parsing() {
        assert_eq!(SelectedFile::new("scan.PNG", 10, "image/png").extension().as_deref(), Some("png"));
        assert_eq!(SelectedFile::new("archive.tar.pdf", 10, "").extension().as_deref(), Some("pdf"));
        assert_eq!(SelectedFile::new("README", 10, "").extension(), None);
        assert_eq!(SelectedFile::new(".png", 10, "").extension(), None);
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(SelectedFile::from_name("scan.JPG", 1).mime, "image/jpeg");
        assert_eq!(SelectedFile::from_name("labs.pdf", 1).mime, "application/pdf");
        assert_eq!(SelectedFile::from_name("notes.txt", 1).mime, "application/octet-stream");
    }

    #[test]
    fn test_supported_formats() {
        assert!(SelectedFile::new("scan.jpeg", 1, "image/jpeg").is_supported_format());
        assert!(SelectedFile::new("labs.pdf", 1, "application/pdf").is_supported_format());
        assert!(!SelectedFile::new("scan.dcm", 1, "application/dicom").is_supported_format());
    }

    #[test]
    fn test_size_limit_is_advisory() {
        let big = SelectedFile::new("scan.png", ADVERTISED_MAX_BYTES + 1, "image/png");
        assert!(big.exceeds_advertised_limit());

        let mut selection = UploadSelection::default();
        selection.select_type(ReportType::Mri);
        selection.select_file(big);
        assert!(selection.require().is_ok());
    }

    #[test]
    fn test_display_size() {
        assert_eq!(SelectedFile::new("a.png", 512, "").display_size(), "512 B");
        assert_eq!(SelectedFile::new("a.png", 2048, "").display_size(), "2.0 KB");
        assert_eq!(SelectedFile::new("a.png", 5 * 1024 * 1024, "").display_size(), "5.0 MB");
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.jpg,.jpeg,.png");
    }

    #[test]
    fn test_require_both_selections() {
        let mut selection = UploadSelection::default();
        assert_eq!(selection.require().unwrap_err(), UploadError::MissingSelection);

        selection.select_type(ReportType::Ct);
        assert!(!selection.is_complete());
        assert!(selection.require().is_err());

        selection.select_file(SelectedFile::new("ct.pdf", 100, "application/pdf"));
        let (report_type, file) = selection.require().unwrap();
        assert_eq!(report_type, ReportType::Ct);
        assert_eq!(file.name, "ct.pdf");
    }

    #[test]
    fn test_only_missing_selection_is_user_facing() {
        assert!(UploadError::MissingSelection.notification().unwrap().is_error());
        assert!(UploadError::AlreadyRunning.notification().is_none());
        assert!(UploadError::Detached.notification().is_none());
    }
}
