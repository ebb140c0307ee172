//! UI Components for the extraction form.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - File pickers, skip option and trigger
//! - [`ProgressPanel`] - Live progress bar
//! - [`MessagesPanel`] - Append-only message log
//! - [`ResultsPanel`] - Report download links

mod hero;
mod upload;
mod progress;
mod results;
mod footer;
mod logs;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use results::*;
pub use footer::*;
pub use logs::*;
