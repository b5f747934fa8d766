#[cfg(target_os = "android")]
mod app;

pub mod camera;
pub mod logging;

#[cfg(target_os = "android")]
#[no_mangle]
fn android_main(app: android_activity::AndroidApp) {
    if let Err(err) = app::run(app) {
        log::error!(target: "Camera", "{err:#}");
    }
}
