use std::ffi::{c_char, CStr};

/// Copies a camera id handed out by the NDK, replacing invalid UTF-8.
///
/// # Safety
/// `s` must be null or point to a nul terminated string.
pub(crate) unsafe fn camera_id_from_ptr(s: *const c_char) -> Option<String> {
    if s.is_null() {
        return None;
    }
    Some(CStr::from_ptr(s).to_string_lossy().into_owned())
}
