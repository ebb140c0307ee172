//! What the user picked in the form, and the checks run before submitting.

use crate::error::ValidationError;

/// Form selection read at trigger time.
///
/// Generic over the file handle so the browser can pass `web_sys::File`
/// and tests can pass plain names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<F> {
    pub pdf_files: Vec<F>,
    pub excel_file: Option<F>,
    pub skip_percentuais: bool,
}

impl<F> Selection<F> {
    pub fn new(pdf_files: Vec<F>, excel_file: Option<F>, skip_percentuais: bool) -> Self {
        Self { pdf_files, excel_file, skip_percentuais }
    }

    /// Checks the minimal preconditions for a run.
    ///
    /// File type, size and content are left to the server.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_files.is_empty() {
            return Err(ValidationError::NoPdfFiles);
        }
        if !self.skip_percentuais && self.excel_file.is_none() {
            return Err(ValidationError::MissingSpreadsheet);
        }
        Ok(())
    }
}

/// State of the spreadsheet picker, driven by the skip checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadsheetInput {
    pub disabled: bool,
    /// Class added to the picker's wrapper.
    pub css_class: Option<&'static str>,
}

impl SpreadsheetInput {
    pub fn for_skip(skip_percentuais: bool) -> Self {
        if skip_percentuais {
            Self { disabled: true, css_class: Some("disabled") }
        } else {
            Self { disabled: false, css_class: None }
        }
    }
}
