use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};

pub use self::config::{CameraSelection, NotifierConfig};
pub use self::sink::{ChannelSink, NoopSink};

#[cfg(target_os = "android")]
pub mod camera2;

mod config;
#[cfg(any(target_os = "android", test))]
mod cstr;
mod sink;

/// Camera subsystem as exposed by the platform.
///
/// Callbacks registered here are invoked from a platform owned thread.
#[cfg_attr(test, mockall::automock)]
pub trait CameraService {
    /// Camera identifiers in platform order.
    fn camera_ids(&self) -> Result<Vec<String>>;

    fn register_availability(&mut self, listener: Arc<AvailabilityListener>) -> Result<()>;

    fn unregister_availability(&mut self, listener: &Arc<AvailabilityListener>) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityEvent {
    Available(String),
    Unavailable(String),
}

/// Receives availability events on their way to the application layer.
pub trait AvailabilitySink: Send + Sync {
    fn forward(&self, event: AvailabilityEvent);
}

/// The callback object handed to the camera service.
pub struct AvailabilityListener {
    log_target: &'static str,
    sink: Arc<dyn AvailabilitySink>,
}

impl AvailabilityListener {
    pub fn new(log_target: &'static str, sink: Arc<dyn AvailabilitySink>) -> Self {
        Self { log_target, sink }
    }

    pub fn on_available(&self, id: &str) {
        info!(target: self.log_target, "Camera available: {id}");
        self.sink.forward(AvailabilityEvent::Available(id.to_string()));
    }

    pub fn on_unavailable(&self, id: &str) {
        error!(target: self.log_target, "Camera unavailable: {id}");
        self.sink.forward(AvailabilityEvent::Unavailable(id.to_string()));
    }
}

/// Watches camera availability for the lifetime of the hosting activity.
pub struct CameraNotifier<S: CameraService> {
    service: S,
    config: NotifierConfig,
    sink: Arc<dyn AvailabilitySink>,
    camera_id: Option<String>,
    listener: Option<Arc<AvailabilityListener>>,
}

impl<S: CameraService> CameraNotifier<S> {
    pub fn new(service: S, config: NotifierConfig) -> Self {
        Self::with_sink(service, config, Arc::new(NoopSink))
    }

    pub fn with_sink(service: S, config: NotifierConfig, sink: Arc<dyn AvailabilitySink>) -> Self {
        Self {
            service,
            config,
            sink,
            camera_id: None,
            listener: None,
        }
    }

    /// Selects a camera and registers the availability callback.
    ///
    /// Never fails: a missing camera leaves the notifier unregistered and
    /// registration errors are only logged.
    pub fn initialize(&mut self) {
        if self.listener.is_some() {
            return;
        }
        let target = self.config.log_target;

        let camera_ids = match self.service.camera_ids() {
            Ok(ids) => ids,
            Err(err) => {
                error!(target: target, "Failed to get camera id list: {err:#}");
                return;
            }
        };
        self.camera_id = self.config.selection.select(&camera_ids);

        let Some(camera_id) = self.camera_id.as_deref() else {
            return;
        };
        let listener = Arc::new(AvailabilityListener::new(target, self.sink.clone()));
        match self.service.register_availability(listener.clone()) {
            Ok(()) => {
                debug!(target: target, "Availability callback registered (camera: {camera_id})");
                self.listener = Some(listener);
            }
            Err(err) => {
                error!(target: target, "Camera manager error: {err:#}");
            }
        }
    }

    /// Releases the availability callback, if any.
    pub fn shutdown(&mut self) {
        if let Some(listener) = self.listener.take() {
            if let Err(err) = self.service.unregister_availability(&listener) {
                error!(target: self.config.log_target, "Failed to unregister availability callback: {err:#}");
            }
        }
    }

    pub fn is_registered(&self) -> bool {
        self.listener.is_some()
    }

    pub fn selected_camera(&self) -> Option<&str> {
        self.camera_id.as_deref()
    }
}

impl<S: CameraService> Drop for CameraNotifier<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
