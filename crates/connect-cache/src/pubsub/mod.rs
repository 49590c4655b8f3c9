//! Redis Pub/Sub fan-out

mod channels;
mod publisher;

pub use channels::{BROADCAST_CHANNEL, PubSubChannel, USER_CHANNEL_PREFIX};
pub use publisher::{PubSubEvent, Publisher};
