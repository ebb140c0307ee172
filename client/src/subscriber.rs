//! Live progress subscription.
//!
//! One server-push channel per run. The subscriber owns the open channel's
//! handle and closes it before opening another, so at most one channel is
//! ever live. Events are consumed as a stream that ends at `DONE`, at the
//! first transport error, or when the transport drops it. There is no
//! reconnect.

use std::cell::RefCell;

use futures::stream::{Stream, StreamExt};

use crate::error::TransportError;
use crate::progress::{Progress, ProgressEvent};

/// Raw message delivered by a progress transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelMessage {
    /// Event data as sent by the server.
    Data(String),
    /// The transport failed; no more messages follow.
    Error(String),
}

/// Close side of an open channel.
pub trait ChannelHandle {
    fn close(&mut self);
}

/// Opens progress channels (an `EventSource` in the browser).
pub trait ProgressSource {
    type Handle: ChannelHandle;
    type Events: Stream<Item = ChannelMessage> + Unpin;

    fn open(&self, url: &str) -> Result<(Self::Handle, Self::Events), TransportError>;
}

/// How a pump loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PumpEnd {
    /// The server sent `DONE`.
    Done,
    /// The transport reported an error.
    Failed(String),
    /// The stream ended without a sentinel.
    Closed,
}

/// Holds at most one open progress channel.
pub struct ProgressSubscriber<S: ProgressSource> {
    source: S,
    url: String,
    active: RefCell<Option<S::Handle>>,
}

impl<S: ProgressSource> ProgressSubscriber<S> {
    pub fn new(source: S, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
            active: RefCell::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_open(&self) -> bool {
        self.active.borrow().is_some()
    }

    /// Closes the current channel, if any, then opens a fresh one.
    pub fn start(&self) -> Result<S::Events, TransportError> {
        self.close();
        let (handle, events) = self.source.open(&self.url)?;
        *self.active.borrow_mut() = Some(handle);
        log::debug!("Progress channel opened: {}", self.url);
        Ok(events)
    }

    /// Closes the current channel. Safe to call when nothing is open.
    pub fn close(&self) {
        let handle = self.active.borrow_mut().take();
        if let Some(mut handle) = handle {
            handle.close();
            log::debug!("Progress channel closed");
        }
    }

    /// Feeds progress updates to `on_progress` until the channel ends.
    ///
    /// Keep-alives and unrecognised payloads are skipped. The handle is
    /// closed on every exit.
    pub async fn pump<E, R>(&self, mut events: E, mut on_progress: R) -> PumpEnd
    where
        E: Stream<Item = ChannelMessage> + Unpin,
        R: FnMut(Progress),
    {
        while let Some(message) = events.next().await {
            match message {
                ChannelMessage::Data(data) => match ProgressEvent::parse(&data) {
                    ProgressEvent::Update(progress) => on_progress(progress),
                    ProgressEvent::KeepAlive => {}
                    ProgressEvent::Unrecognized(data) => {
                        log::debug!("Ignoring progress payload {:?}", data);
                    }
                    ProgressEvent::Done => {
                        self.close();
                        return PumpEnd::Done;
                    }
                },
                ChannelMessage::Error(reason) => {
                    log::error!("Progress channel error: {}", reason);
                    self.close();
                    return PumpEnd::Failed(reason);
                }
            }
        }
        self.close();
        PumpEnd::Closed
    }
}
