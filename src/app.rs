use std::time::Duration;

use android_activity::{AndroidApp, MainEvent, PollEvent};
use anyhow::Result;
use log::info;

use crate::camera::{camera2::Camera2Service, CameraNotifier, NotifierConfig};

pub fn run(app: AndroidApp) -> Result<()> {
    let config = NotifierConfig::default();
    crate::logging::init(config.log_target);

    let service = Camera2Service::new()?;
    let mut notifier = CameraNotifier::new(service, config);
    notifier.initialize();

    let mut destroyed = false;
    while !destroyed {
        app.poll_events(Some(Duration::from_millis(500)), |event| {
            if let PollEvent::Main(MainEvent::Destroy) = event {
                destroyed = true;
            }
        });
    }

    notifier.shutdown();
    info!(target: "Camera", "Activity destroyed");
    Ok(())
}
