//! Submission orchestrator.
//!
//! One run per trigger: validate, lock the form, open the progress channel,
//! upload, render the outcome, then release everything. The progress pump
//! and the upload share one task; neither blocks the other.
//!
//! ```text
//! Idle ──▶ Validating ──▶ Idle                  (validation failed)
//!                    └──▶ Submitting ──▶ Idle   (succeeded or failed)
//! ```

use std::cell::Cell;

use futures::future::{select, Either};
use futures::pin_mut;

use crate::config::Endpoints;
use crate::error::{ExtractionError, ExtractionResult, ValidationError};
use crate::messages::LogLine;
use crate::progress::ProgressDisplay;
use crate::selection::Selection;
use crate::subscriber::{ProgressSource, ProgressSubscriber};
use crate::upload::{interpret_reply, DownloadLink, ExtractionApi, ExtractionOutcome, UploadForm};

/// Trigger label while idle.
pub const TRIGGER_LABEL: &str = "Start Extraction";

/// Trigger label while a run is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";

pub const READY_MESSAGE: &str = "Ready to start. Select the files and click 'Start Extraction'.";
pub const START_MESSAGE: &str = "Starting upload and extraction...";
pub const SUCCESS_MESSAGE: &str = "Extraction completed successfully!";

/// Bindings to whatever surface renders the form.
pub trait ControllerView {
    /// Appends a line to the visible log and scrolls to it.
    fn append_log(&self, line: LogLine);

    /// Locks or unlocks the trigger and shows or hides the progress container.
    fn set_processing(&self, processing: bool);

    fn render_progress(&self, display: &ProgressDisplay);

    /// Hides the results area and removes its links.
    fn clear_results(&self);

    /// Reveals the results area with one anchor per link.
    fn show_results(&self, links: &[DownloadLink]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
}

/// What a call to [`ExtractionController::submit`] ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A run was already in flight; nothing happened.
    Busy,
    /// Validation failed; no request was made.
    Rejected(ValidationError),
    Succeeded(ExtractionOutcome),
    Failed(ExtractionError),
}

pub struct ExtractionController<A, S, V>
where
    A: ExtractionApi,
    S: ProgressSource,
    V: ControllerView,
{
    api: A,
    progress: ProgressSubscriber<S>,
    view: V,
    endpoints: Endpoints,
    phase: Cell<Phase>,
}

impl<A, S, V> ExtractionController<A, S, V>
where
    A: ExtractionApi,
    S: ProgressSource,
    V: ControllerView,
{
    pub fn new(api: A, source: S, view: V, endpoints: Endpoints) -> Self {
        let progress = ProgressSubscriber::new(source, endpoints.progress_url());
        Self {
            api,
            progress,
            view,
            endpoints,
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn progress(&self) -> &ProgressSubscriber<S> {
        &self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_processing(&self) -> bool {
        self.phase.get() == Phase::Submitting
    }

    /// Writes the greeting shown when the page loads.
    pub fn ready(&self) {
        self.log(LogLine::info(READY_MESSAGE));
    }

    /// Runs one extraction for `selection`.
    ///
    /// Returns [`RunOutcome::Busy`] without side effects if a run is already
    /// in flight. Dropping the returned future mid-run still releases the
    /// lock and closes the progress channel.
    pub async fn submit(&self, selection: Selection<A::File>) -> RunOutcome {
        if self.phase.get() != Phase::Idle {
            log::warn!("Extraction already running, trigger ignored");
            return RunOutcome::Busy;
        }

        self.phase.set(Phase::Validating);
        if let Err(err) = selection.validate() {
            self.log(LogLine::error(format!("ERROR: {}", err)));
            self.phase.set(Phase::Idle);
            return RunOutcome::Rejected(err);
        }

        let _lock = ProcessingLock::acquire(self);
        self.log(LogLine::info(START_MESSAGE));

        match self.run(selection).await {
            Ok(outcome) => {
                self.publish(&outcome);
                RunOutcome::Succeeded(outcome)
            }
            Err(err) => {
                log::error!("Extraction failed: {:?}", err);
                self.log(LogLine::error(format!("operation failed: {}", err)));
                RunOutcome::Failed(err)
            }
        }
    }

    async fn run(&self, selection: Selection<A::File>) -> ExtractionResult<ExtractionOutcome> {
        let events = match self.progress.start() {
            Ok(events) => Some(events),
            Err(err) => {
                log::error!("Could not open progress channel: {}", err);
                None
            }
        };

        let url = self.endpoints.upload_url();
        let form = UploadForm::from_selection(selection);
        let upload = self.api.upload(&url, form);

        let reply = match events {
            Some(events) => {
                let pump = self.progress.pump(events, |progress| {
                    self.view.render_progress(&ProgressDisplay::from(progress));
                });
                pin_mut!(pump);
                pin_mut!(upload);
                match select(pump, upload).await {
                    Either::Left((end, upload)) => {
                        log::debug!("Progress channel finished first: {:?}", end);
                        upload.await
                    }
                    Either::Right((reply, _pump)) => reply,
                }
            }
            None => upload.await,
        }?;

        let mut outcome = interpret_reply(&reply)?;
        for link in &mut outcome.links {
            link.href = self.endpoints.download_url(&link.href);
        }
        Ok(outcome)
    }

    fn publish(&self, outcome: &ExtractionOutcome) {
        self.log(LogLine::success(SUCCESS_MESSAGE));
        if !outcome.message.is_empty() {
            self.log(LogLine::info(outcome.message.clone()));
        }
        if outcome.show_results {
            self.view.show_results(&outcome.links);
        }
    }

    fn log(&self, line: LogLine) {
        log::info!("{}", line.message);
        self.view.append_log(line);
    }
}

/// Held for the whole submitting phase; releasing it restores the idle form.
struct ProcessingLock<'a, A, S, V>
where
    A: ExtractionApi,
    S: ProgressSource,
    V: ControllerView,
{
    controller: &'a ExtractionController<A, S, V>,
}

impl<'a, A, S, V> ProcessingLock<'a, A, S, V>
where
    A: ExtractionApi,
    S: ProgressSource,
    V: ControllerView,
{
    fn acquire(controller: &'a ExtractionController<A, S, V>) -> Self {
        controller.phase.set(Phase::Submitting);
        controller.view.set_processing(true);
        controller.view.clear_results();
        controller.view.render_progress(&ProgressDisplay::preparing());
        Self { controller }
    }
}

impl<A, S, V> Drop for ProcessingLock<'_, A, S, V>
where
    A: ExtractionApi,
    S: ProgressSource,
    V: ControllerView,
{
    fn drop(&mut self) {
        self.controller.progress.close();
        self.controller.view.set_processing(false);
        self.controller.phase.set(Phase::Idle);
    }
}
