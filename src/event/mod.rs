mod bus;
mod events;

pub use bus::{EventBus, EventSink, Handler, HandlerId};
pub use events::{EventKind, ShopEvent, Topic};
