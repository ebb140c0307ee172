//! Multipart submission to the extraction endpoint and its reply.

use serde::{Deserialize, Serialize};

use crate::config::{EXCEL_FILE_FIELD, PDF_FILES_FIELD, SKIP_FIELD, SKIP_VALUE};
use crate::error::{ExtractionError, ServerError, TransportError};
use crate::selection::Selection;

// =============================================================================
// Request
// =============================================================================

/// One multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart<F> {
    File { field: &'static str, file: F },
    Text { field: &'static str, value: &'static str },
}

/// Ordered multipart payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm<F> {
    pub parts: Vec<FormPart<F>>,
}

impl<F> UploadForm<F> {
    /// One part per PDF, then either the spreadsheet or the skip marker.
    ///
    /// With skip mode on the spreadsheet is never sent, even if picked, and
    /// the marker is the only signal. With skip mode off the marker is absent.
    pub fn from_selection(selection: Selection<F>) -> Self {
        let Selection { pdf_files, excel_file, skip_percentuais } = selection;

        let mut parts: Vec<FormPart<F>> = pdf_files
            .into_iter()
            .map(|file| FormPart::File { field: PDF_FILES_FIELD, file })
            .collect();

        if skip_percentuais {
            parts.push(FormPart::Text { field: SKIP_FIELD, value: SKIP_VALUE });
        } else if let Some(file) = excel_file {
            parts.push(FormPart::File { field: EXCEL_FILE_FIELD, file });
        }

        Self { parts }
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.parts
            .iter()
            .map(|part| match part {
                FormPart::File { field, .. } | FormPart::Text { field, .. } => *field,
            })
            .collect()
    }
}

/// Sends the multipart payload (gloo-net in the browser).
#[allow(async_fn_in_trait)]
pub trait ExtractionApi {
    type File;

    async fn upload(&self, url: &str, form: UploadForm<Self::File>) -> Result<RawReply, TransportError>;
}

// =============================================================================
// Reply
// =============================================================================

/// Status and body exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON body of `/upload_and_extract`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// "success" or "error"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub download_links: Option<DownloadLinks>,
}

/// Report links keyed by kind. Unknown kinds are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excel_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_report: Option<String>,
}

/// Kinds of downloadable report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Excel,
    Csv,
}

impl ReportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Excel => "Download Excel Report (.xlsx)",
            ReportKind::Csv => "Download CSV Report (.csv)",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ReportKind::Excel => "excel_report",
            ReportKind::Csv => "csv_report",
        }
    }
}

/// An anchor to render in the results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub kind: ReportKind,
    pub href: String,
}

impl DownloadLinks {
    /// Present links, Excel first.
    pub fn to_links(&self) -> Vec<DownloadLink> {
        [
            (ReportKind::Excel, &self.excel_report),
            (ReportKind::Csv, &self.csv_report),
        ]
        .into_iter()
        .filter_map(|(kind, href)| {
            href.as_ref()
                .filter(|h| !h.is_empty())
                .map(|href| DownloadLink { kind, href: href.clone() })
        })
        .collect()
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub success: bool,
    pub message: String,
    pub links: Vec<DownloadLink>,
    /// The reply carried a `download_links` object, even an empty one.
    pub show_results: bool,
}

/// Turns a raw reply into an outcome or an error.
///
/// Error statuses use the payload `message` when it parses, else the generic
/// `server error <status>` text.
pub fn interpret_reply(reply: &RawReply) -> Result<ExtractionOutcome, ExtractionError> {
    let parsed = serde_json::from_str::<UploadResponse>(&reply.body);

    if !reply.is_success() {
        let message = parsed.ok().and_then(|body| body.message);
        return Err(ServerError::from_reply(reply.status, message).into());
    }

    let body = parsed.map_err(|e| TransportError::InvalidResponse(e.to_string()))?;
    let links = body
        .download_links
        .as_ref()
        .map(DownloadLinks::to_links)
        .unwrap_or_default();

    Ok(ExtractionOutcome {
        success: true,
        message: body.message.unwrap_or_default(),
        links,
        show_results: body.download_links.is_some(),
    })
}
