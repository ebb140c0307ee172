//! Progress channel backed by the browser's `EventSource`.
//!
//! Event callbacks push into an unbounded channel; the controller consumes
//! the receiving end as a stream. The handle owns the callbacks, so they
//! live exactly as long as the channel is open.

use extraction_client::{ChannelHandle, ChannelMessage, ProgressSource, TransportError};
use futures::channel::mpsc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventSource, MessageEvent};

#[derive(Debug, Clone, Copy, Default)]
pub struct EventSourceProgress;

pub struct EventSourceHandle {
    source: EventSource,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(Event)>,
}

impl ChannelHandle for EventSourceHandle {
    fn close(&mut self) {
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        self.source.close();
    }
}

impl ProgressSource for EventSourceProgress {
    type Handle = EventSourceHandle;
    type Events = mpsc::UnboundedReceiver<ChannelMessage>;

    fn open(&self, url: &str) -> Result<(Self::Handle, Self::Events), TransportError> {
        let source = EventSource::new(url)
            .map_err(|e| TransportError::Channel(format!("Failed to create EventSource: {:?}", e)))?;

        let (tx, rx) = mpsc::unbounded();

        let data_tx = tx.clone();
        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Some(data) = event.data().as_string() {
                let _ = data_tx.unbounded_send(ChannelMessage::Data(data));
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        // The browser would reconnect on its own; a run gets one channel only.
        let onerror = Closure::wrap(Box::new(move |_: Event| {
            let _ = tx.unbounded_send(ChannelMessage::Error("EventSource error".to_string()));
            tx.close_channel();
        }) as Box<dyn FnMut(Event)>);
        source.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        log::info!("📡 Progress stream opened: {}", url);

        let handle = EventSourceHandle {
            source,
            _onmessage: onmessage,
            _onerror: onerror,
        };
        Ok((handle, rx))
    }
}
