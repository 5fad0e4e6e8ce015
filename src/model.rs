use crate::event::{EventSink, ShopEvent};

/// Base for state that announces its own changes on the event bus
#[derive(Debug, Clone)]
pub struct Model {
    events: EventSink,
}

impl Model {
    pub fn new(events: EventSink) -> Self {
        Self { events }
    }

    /// Announce a change to every subscriber of the event's topic
    pub fn emit_changes(&self, event: ShopEvent) {
        log::debug!("model change: {}", event.name());
        self.events.emit(event);
    }

    pub fn events(&self) -> &EventSink {
        &self.events
    }
}
