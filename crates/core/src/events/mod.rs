//! Events module - store change notifications.

mod sink;
mod store_event;

pub use sink::{ChannelStoreEventSink, MockStoreEventSink, NoOpStoreEventSink, StoreEventSink};
pub use store_event::StoreEvent;
