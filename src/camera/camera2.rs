use std::{
    ffi::{c_char, c_void},
    ptr::null_mut,
    slice,
    sync::Arc,
};

use anyhow::{anyhow, Result};
use log::{debug, error};
use ndk_sys::{
    camera_status_t, ACameraManager, ACameraManager_AvailabilityCallbacks, ACameraManager_create,
    ACameraManager_delete, ACameraManager_deleteCameraIdList, ACameraManager_getCameraIdList,
    ACameraManager_registerAvailabilityCallback, ACameraManager_unregisterAvailabilityCallback,
};

use super::{cstr::camera_id_from_ptr, AvailabilityListener, CameraService};

#[link(name = "camera2ndk")]
extern "C" {}

/// camera2 NDK backed camera service.
pub struct Camera2Service {
    camera_manager: *mut ACameraManager,
    // The NDK keeps the callbacks pointer until unregistration.
    callbacks: Option<Box<ACameraManager_AvailabilityCallbacks>>,
    listener: Option<Arc<AvailabilityListener>>,
}

impl Camera2Service {
    pub fn new() -> Result<Self> {
        let camera_manager = unsafe { ACameraManager_create() };
        if camera_manager.is_null() {
            return Err(anyhow!("Failed to create camera manager"));
        }
        Ok(Self {
            camera_manager,
            callbacks: None,
            listener: None,
        })
    }

    fn release_callbacks(&mut self) -> Result<()> {
        if let Some(callbacks) = self.callbacks.take() {
            let camera_status = unsafe {
                ACameraManager_unregisterAvailabilityCallback(self.camera_manager, &*callbacks)
            };
            self.listener = None;
            if camera_status != camera_status_t::ACAMERA_OK {
                return Err(anyhow!(
                    "Failed to unregister availability callback (reason: {:?})",
                    camera_status
                ));
            }
        }
        Ok(())
    }
}

impl CameraService for Camera2Service {
    fn camera_ids(&self) -> Result<Vec<String>> {
        unsafe {
            let mut camera_id_list_raw = null_mut();
            let camera_status =
                ACameraManager_getCameraIdList(self.camera_manager, &mut camera_id_list_raw);
            if camera_status != camera_status_t::ACAMERA_OK {
                return Err(anyhow!(
                    "Failed to get camera id list (reason: {:?})",
                    camera_status
                ));
            }
            if camera_id_list_raw.is_null() {
                return Err(anyhow!(
                    "Failed to get camera id list (reason: camera_id_list is null)"
                ));
            }

            let camera_id_list = &*camera_id_list_raw;
            let camera_ids = if camera_id_list.numCameras < 1 || camera_id_list.cameraIds.is_null() {
                vec![]
            } else {
                slice::from_raw_parts(camera_id_list.cameraIds, camera_id_list.numCameras as usize)
                    .iter()
                    .filter_map(|v| camera_id_from_ptr(*v))
                    .collect()
            };
            ACameraManager_deleteCameraIdList(camera_id_list_raw);

            debug!(target: "Camera", "camera_ids: {:?}", camera_ids);
            Ok(camera_ids)
        }
    }

    fn register_availability(&mut self, listener: Arc<AvailabilityListener>) -> Result<()> {
        self.release_callbacks()?;

        unsafe extern "C" fn on_camera_available(context: *mut c_void, camera_id: *const c_char) {
            let listener = &*(context as *const AvailabilityListener);
            listener.on_available(&camera_id_from_ptr(camera_id).unwrap_or_default());
        }

        unsafe extern "C" fn on_camera_unavailable(context: *mut c_void, camera_id: *const c_char) {
            let listener = &*(context as *const AvailabilityListener);
            listener.on_unavailable(&camera_id_from_ptr(camera_id).unwrap_or_default());
        }

        let callbacks = Box::new(ACameraManager_AvailabilityCallbacks {
            context: Arc::as_ptr(&listener) as *mut c_void,
            onCameraAvailable: Some(on_camera_available),
            onCameraUnavailable: Some(on_camera_unavailable),
        });
        let camera_status =
            unsafe { ACameraManager_registerAvailabilityCallback(self.camera_manager, &*callbacks) };
        if camera_status != camera_status_t::ACAMERA_OK {
            return Err(anyhow!(
                "Failed to register availability callback (reason: {:?})",
                camera_status
            ));
        }
        self.callbacks = Some(callbacks);
        self.listener = Some(listener);
        Ok(())
    }

    fn unregister_availability(&mut self, listener: &Arc<AvailabilityListener>) -> Result<()> {
        match self.listener.as_ref() {
            Some(registered) if Arc::ptr_eq(registered, listener) => self.release_callbacks(),
            _ => Err(anyhow!("availability callback is not registered")),
        }
    }
}

impl Drop for Camera2Service {
    fn drop(&mut self) {
        if let Err(err) = self.release_callbacks() {
            error!(target: "Camera", "{err:#}");
        }
        unsafe { ACameraManager_delete(self.camera_manager) };
    }
}
