//! Application configuration.
//!
//! Centralized configuration for the extraction form. The page is served by
//! the extraction service, so the backend is the page origin by default.

/// Backend base URL. Empty means same origin.
pub const BACKEND_URL: &str = "";

/// Whether the "extract without percentage file" checkbox is rendered.
///
/// When false, skip mode is permanently off and the spreadsheet is required.
pub const SHOW_SKIP_OPTION: bool = true;

/// Initial state of the skip checkbox.
pub const SKIP_DEFAULT_CHECKED: bool = false;

/// File picker filter for the PDF input.
pub const ACCEPT_PDF: &str = ".pdf";

/// File picker filter for the percentage spreadsheet.
pub const ACCEPT_SPREADSHEET: &str = ".xls,.xlsx";
