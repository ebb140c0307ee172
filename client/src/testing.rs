//! In-memory stand-ins for the browser bindings.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::{mpsc, oneshot};

use crate::controller::ControllerView;
use crate::error::TransportError;
use crate::messages::{LogLevel, LogLine, MessageLog};
use crate::progress::ProgressDisplay;
use crate::subscriber::{ChannelHandle, ChannelMessage, ProgressSource};
use crate::upload::{DownloadLink, ExtractionApi, FormPart, RawReply, UploadForm};

// =============================================================================
// View
// =============================================================================

#[derive(Default)]
struct ViewState {
    log: MessageLog,
    processing: Vec<bool>,
    progress: Vec<ProgressDisplay>,
    results_visible: bool,
    links: Vec<DownloadLink>,
}

/// Records every call the controller makes on its view.
#[derive(Clone, Default)]
pub struct RecordingView {
    state: Rc<RefCell<ViewState>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.state.borrow().log.lines().iter().map(|l| l.message.clone()).collect()
    }

    pub fn last_level(&self) -> Option<LogLevel> {
        self.state.borrow().log.last().map(|l| l.level)
    }

    pub fn processing_history(&self) -> Vec<bool> {
        self.state.borrow().processing.clone()
    }

    pub fn progress_history(&self) -> Vec<ProgressDisplay> {
        self.state.borrow().progress.clone()
    }

    pub fn results_visible(&self) -> bool {
        self.state.borrow().results_visible
    }

    pub fn links(&self) -> Vec<DownloadLink> {
        self.state.borrow().links.clone()
    }
}

impl ControllerView for RecordingView {
    fn append_log(&self, line: LogLine) {
        self.state.borrow_mut().log.push(line);
    }

    fn set_processing(&self, processing: bool) {
        self.state.borrow_mut().processing.push(processing);
    }

    fn render_progress(&self, display: &ProgressDisplay) {
        self.state.borrow_mut().progress.push(display.clone());
    }

    fn clear_results(&self) {
        let mut state = self.state.borrow_mut();
        state.results_visible = false;
        state.links.clear();
    }

    fn show_results(&self, links: &[DownloadLink]) {
        let mut state = self.state.borrow_mut();
        state.results_visible = true;
        state.links.extend_from_slice(links);
    }
}

// =============================================================================
// Progress source
// =============================================================================

#[derive(Default)]
struct SourceState {
    script: Vec<ChannelMessage>,
    end_after_script: bool,
    fail: Option<String>,
    next_id: usize,
    journal: Vec<String>,
    senders: Vec<(usize, mpsc::UnboundedSender<ChannelMessage>)>,
}

/// Replays the same script on every channel it opens.
///
/// Channels stay pending after the script unless [`ScriptedSource::ending`]
/// is used, like a live server that has nothing more to say.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    state: Rc<RefCell<SourceState>>,
}

impl ScriptedSource {
    pub fn new(payloads: Vec<&str>) -> Self {
        Self::with_messages(
            payloads
                .into_iter()
                .map(|p| ChannelMessage::Data(p.to_string()))
                .collect(),
        )
    }

    pub fn with_messages(script: Vec<ChannelMessage>) -> Self {
        let source = Self::default();
        source.state.borrow_mut().script = script;
        source
    }

    pub fn failing(reason: &str) -> Self {
        let source = Self::default();
        source.state.borrow_mut().fail = Some(reason.to_string());
        source
    }

    pub fn ending(self) -> Self {
        self.state.borrow_mut().end_after_script = true;
        self
    }

    pub fn journal(&self) -> Vec<String> {
        self.state.borrow().journal.clone()
    }

    /// Channels opened and not yet closed.
    pub fn open_count(&self) -> usize {
        self.state.borrow().senders.len()
    }
}

pub struct ScriptedHandle {
    id: usize,
    state: Rc<RefCell<SourceState>>,
}

impl ChannelHandle for ScriptedHandle {
    fn close(&mut self) {
        let mut state = self.state.borrow_mut();
        let before = state.senders.len();
        state.senders.retain(|(id, _)| *id != self.id);
        if state.senders.len() != before {
            state.journal.push(format!("close {}", self.id));
        }
    }
}

impl ProgressSource for ScriptedSource {
    type Handle = ScriptedHandle;
    type Events = mpsc::UnboundedReceiver<ChannelMessage>;

    fn open(&self, url: &str) -> Result<(Self::Handle, Self::Events), TransportError> {
        let mut state = self.state.borrow_mut();
        if let Some(reason) = &state.fail {
            return Err(TransportError::Channel(reason.clone()));
        }

        state.next_id += 1;
        let id = state.next_id;
        state.journal.push(format!("open {} {}", id, url));

        let (tx, rx) = mpsc::unbounded();
        for message in &state.script {
            let _ = tx.unbounded_send(message.clone());
        }
        if state.end_after_script {
            tx.close_channel();
        }
        state.senders.push((id, tx));

        let handle = ScriptedHandle { id, state: Rc::clone(&self.state) };
        Ok((handle, rx))
    }
}

// =============================================================================
// Upload API
// =============================================================================

/// One recorded upload.
#[derive(Debug, Clone)]
pub struct UploadCall {
    pub url: String,
    pub fields: Vec<&'static str>,
    pub files: Vec<&'static str>,
}

struct ApiState {
    reply: Result<RawReply, TransportError>,
    gate: Option<oneshot::Receiver<()>>,
    calls: Vec<UploadCall>,
}

/// Answers every upload with the same canned reply.
#[derive(Clone)]
pub struct FakeApi {
    state: Rc<RefCell<ApiState>>,
}

impl FakeApi {
    fn with_reply(reply: Result<RawReply, TransportError>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ApiState { reply, gate: None, calls: Vec::new() })),
        }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_reply(Ok(RawReply::new(status, body)))
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_reply(Err(TransportError::Request(reason.to_string())))
    }

    /// The first upload waits until the returned sender fires or drops.
    pub fn gated(status: u16, body: &str) -> (Self, oneshot::Sender<()>) {
        let api = Self::replying(status, body);
        let (tx, rx) = oneshot::channel();
        api.state.borrow_mut().gate = Some(rx);
        (api, tx)
    }

    pub fn calls(&self) -> Vec<UploadCall> {
        self.state.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }
}

impl ExtractionApi for FakeApi {
    type File = &'static str;

    async fn upload(&self, url: &str, form: UploadForm<Self::File>) -> Result<RawReply, TransportError> {
        let files = form
            .parts
            .iter()
            .filter_map(|part| match part {
                FormPart::File { file, .. } => Some(*file),
                FormPart::Text { .. } => None,
            })
            .collect();
        let call = UploadCall { url: url.to_string(), fields: form.field_names(), files };
        self.state.borrow_mut().calls.push(call);

        let gate = self.state.borrow_mut().gate.take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.state.borrow().reply.clone()
    }
}
