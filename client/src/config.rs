//! Endpoint and wire configuration.
//!
//! The form is served by the extraction service itself, so by default every
//! URL is relative to the page origin.

/// Multipart field carrying each selected PDF.
pub const PDF_FILES_FIELD: &str = "pdf_files";

/// Multipart field carrying the percentage spreadsheet.
pub const EXCEL_FILE_FIELD: &str = "excel_file";

/// Marker field telling the server to skip the percentage step.
pub const SKIP_FIELD: &str = "skip_percentuals";

/// Value sent with [`SKIP_FIELD`].
pub const SKIP_VALUE: &str = "1";

/// Progress payload that ends the stream.
pub const DONE_SENTINEL: &str = "DONE";

/// Progress payload sent as keep-alive.
pub const PING_SENTINEL: &str = "ping";

/// Where the controller talks to the extraction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Scheme and host, without trailing slash. Empty means same origin.
    pub base_url: String,
    pub progress_path: String,
    pub upload_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            progress_path: "/progress".to_string(),
            upload_path: "/upload_and_extract".to_string(),
        }
    }
}

impl Endpoints {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn progress_url(&self) -> String {
        format!("{}{}", self.base_url, self.progress_path)
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, self.upload_path)
    }

    /// Resolves a download href returned by the server.
    ///
    /// Absolute URLs pass through; relative ones are joined to the base.
    pub fn download_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") || self.base_url.is_empty() {
            return href.to_string();
        }
        if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            format!("{}/{}", self.base_url, href)
        }
    }
}
