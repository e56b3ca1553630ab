//! The resume PDF served by the download endpoint.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::error::{ResumeError, ResumeResult};

/// Resume document settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// Location of the PDF on disk.
    pub path: PathBuf,
    /// File name offered to the browser.
    pub file_name: String,
    /// Cache lifetime in seconds.
    pub cache_max_age_seconds: u64,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("public/documents/Jalaj_Sharma_Resume.pdf"),
            file_name: "Jalaj_Sharma_Resume.pdf".to_string(),
            cache_max_age_seconds: 3600, // 1 hour
        }
    }
}

impl ResumeConfig {
    /// Point at a different PDF, keeping its file name for downloads.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or_else(|| Self::default().file_name, str::to_string);
        Self {
            path,
            file_name,
            ..Self::default()
        }
    }

    /// `Content-Disposition` header value.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    /// `Cache-Control` header value.
    #[must_use]
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age_seconds)
    }
}

/// Read the resume bytes.
///
/// # Errors
/// Returns [`ResumeError::NotFound`] if the file is missing and
/// [`ResumeError::Read`] for any other I/O failure.
pub async fn load_resume(config: &ResumeConfig) -> ResumeResult<Vec<u8>> {
    match tokio::fs::read(&config.path).await {
        Ok(bytes) => {
            debug!(path = %config.path.display(), bytes = bytes.len(), "Loaded resume");
            Ok(bytes)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            error!(path = %config.path.display(), "Resume file not found");
            Err(ResumeError::NotFound)
        }
        Err(err) => {
            error!(path = %config.path.display(), ?err, "Error reading resume");
            Err(ResumeError::Read(err))
        }
    }
}
