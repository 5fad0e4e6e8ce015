use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::event::{ShopEvent, Topic};

/// Handle returned by [`EventBus::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

pub type Handler<C> = Box<dyn FnMut(&mut C, &ShopEvent)>;

struct Subscription<C> {
    id: HandlerId,
    topic: Topic,
    handler: Handler<C>,
}

/// Shared queue of pending events. Models and views hold a clone and emit
/// into it; the owning [`EventBus`] delivers the queue on `emit`/`flush`.
#[derive(Clone, Default)]
pub struct EventSink {
    queue: Rc<RefCell<VecDeque<ShopEvent>>>,
}

impl std::fmt::Debug for EventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSink")
            .field("pending", &self.queue.borrow().len())
            .finish()
    }
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for delivery
    pub fn emit(&self, event: ShopEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn pop(&self) -> Option<ShopEvent> {
        self.queue.borrow_mut().pop_front()
    }
}

/// Dispatches [`ShopEvent`]s to handlers that receive a mutable context `C`.
///
/// Handlers run synchronously in registration order. Anything a handler
/// emits is queued and delivered before `emit`/`flush` return.
pub struct EventBus<C> {
    subscriptions: Vec<Subscription<C>>,
    sink: EventSink,
    next_id: u64,
}

impl<C> std::fmt::Debug for EventBus<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.subscriptions.len()))
            .field("sink", &self.sink)
            .finish()
    }
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> EventBus<C> {
    /// Creates a new event bus with its own queue
    pub fn new() -> Self {
        Self::with_sink(EventSink::new())
    }

    /// Creates a bus that delivers events queued on `sink`
    pub fn with_sink(sink: EventSink) -> Self {
        Self {
            subscriptions: Vec::new(),
            sink,
            next_id: 0,
        }
    }

    /// The queue this bus drains; hand clones to models and views
    pub fn sink(&self) -> EventSink {
        self.sink.clone()
    }

    /// Subscribe a handler to a topic
    pub fn on<F>(&mut self, topic: impl Into<Topic>, handler: F) -> HandlerId
    where
        F: FnMut(&mut C, &ShopEvent) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            topic: topic.into(),
            handler: Box::new(handler),
        });
        id
    }

    /// Subscribe a handler to every event
    pub fn on_all<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&mut C, &ShopEvent) + 'static,
    {
        self.on(Topic::All, handler)
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn off(&mut self, id: HandlerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }

    pub fn handler_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Emit an event and deliver it, along with everything it causes
    pub fn emit(&mut self, ctx: &mut C, event: ShopEvent) {
        self.sink.emit(event);
        self.flush(ctx);
    }

    /// Deliver every queued event. Returns how many events were delivered.
    pub fn flush(&mut self, ctx: &mut C) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.sink.pop() {
            let kind = event.kind();
            log::trace!("dispatching {}", kind.name());
            for sub in self.subscriptions.iter_mut().filter(|sub| sub.topic.matches(kind)) {
                (sub.handler)(ctx, &event);
            }
            delivered += 1;
        }
        delivered
    }
}
