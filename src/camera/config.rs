/// Which enumerated camera the notifier watches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CameraSelection {
    /// Default camera = first enumerated.
    #[default]
    FirstEnumerated,
    Id(String),
}

impl CameraSelection {
    pub fn select(&self, camera_ids: &[String]) -> Option<String> {
        match self {
            CameraSelection::FirstEnumerated => camera_ids.first().cloned(),
            CameraSelection::Id(id) => camera_ids.iter().find(|cid| *cid == id).cloned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub selection: CameraSelection,
    /// Category label attached to every diagnostic.
    pub log_target: &'static str,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            selection: CameraSelection::FirstEnumerated,
            log_target: "Camera",
        }
    }
}
