//! # Extraction client - upload and progress controller
//!
//! Drives the PDF report extraction form: checks the selection, submits the
//! files to the extraction service, follows the live progress channel and
//! hands the resulting download links to the view.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   submit    ┌──────────────────────┐   POST /upload_and_extract
//! │  View      │────────────▶│ ExtractionController │──────────────────────────▶ ExtractionApi
//! │ (bindings) │◀────────────│  lock · log · render │◀────────────────────────── GET /progress
//! └────────────┘   render    └──────────────────────┘        ProgressSubscriber
//! ```
//!
//! The browser, the network and the page are injected through three traits
//! ([`ControllerView`], [`ExtractionApi`], [`ProgressSource`]), so the whole
//! flow runs natively under test.
//!
//! ## Modules
//!
//! - [`error`] - Validation, transport and server errors
//! - [`config`] - Endpoints and wire constants
//! - [`messages`] - Append-only visible log
//! - [`selection`] - Form selection, validation, skip toggle
//! - [`progress`] - Progress payload parsing and display model
//! - [`subscriber`] - Single live progress channel
//! - [`upload`] - Multipart form, reply interpretation, download links
//! - [`controller`] - Submission orchestrator

pub mod config;
pub mod error;
pub mod messages;
pub mod selection;
pub mod progress;
pub mod subscriber;
pub mod upload;
pub mod controller;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::Endpoints;

pub use error::{
    ExtractionError,
    ExtractionResult,
    ServerError,
    TransportError,
    ValidationError,
};

pub use messages::{LogLevel, LogLine, MessageLog};

pub use selection::{Selection, SpreadsheetInput};

pub use progress::{Progress, ProgressDisplay, ProgressEvent};

pub use subscriber::{ChannelHandle, ChannelMessage, ProgressSource, ProgressSubscriber, PumpEnd};

pub use upload::{
    interpret_reply,
    DownloadLink,
    DownloadLinks,
    ExtractionApi,
    ExtractionOutcome,
    FormPart,
    RawReply,
    ReportKind,
    UploadForm,
    UploadResponse,
};

pub use controller::{
    ControllerView,
    ExtractionController,
    Phase,
    RunOutcome,
    PROCESSING_LABEL,
    TRIGGER_LABEL,
};
