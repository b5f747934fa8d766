use std::sync::mpsc::Sender;

use log::debug;

use super::{AvailabilityEvent, AvailabilitySink};

/// Drops every event. Used until the application layer installs a sink.
pub struct NoopSink;

impl AvailabilitySink for NoopSink {
    fn forward(&self, _event: AvailabilityEvent) {}
}

/// Forwards events over a channel to whoever owns the receiver.
pub struct ChannelSink {
    sender: Sender<AvailabilityEvent>,
}

impl ChannelSink {
    pub fn new(sender: Sender<AvailabilityEvent>) -> Self {
        Self { sender }
    }
}

impl AvailabilitySink for ChannelSink {
    fn forward(&self, event: AvailabilityEvent) {
        if let Err(err) = self.sender.send(event) {
            debug!(target: "Camera", "Availability event dropped: {:?}", err.0);
        }
    }
}
