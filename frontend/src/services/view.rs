//! Signal-backed implementation of the controller's view bindings.

use extraction_client::{ControllerView, DownloadLink, LogLine, ProgressDisplay};
use leptos::*;

use crate::types::LogEntry;

/// Write ends of the signals the components read from.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub set_logs: WriteSignal<Vec<LogEntry>>,
    pub set_processing: WriteSignal<bool>,
    pub set_progress: WriteSignal<ProgressDisplay>,
    /// `None` hides the results area.
    pub set_links: WriteSignal<Option<Vec<DownloadLink>>>,
}

impl ControllerView for SignalView {
    fn append_log(&self, line: LogLine) {
        self.set_logs.update(|logs| logs.push(LogEntry::from(line)));
    }

    fn set_processing(&self, processing: bool) {
        self.set_processing.set(processing);
    }

    fn render_progress(&self, display: &ProgressDisplay) {
        self.set_progress.set(display.clone());
    }

    fn clear_results(&self) {
        self.set_links.set(None);
    }

    fn show_results(&self, links: &[DownloadLink]) {
        self.set_links.set(Some(links.to_vec()));
    }
}
