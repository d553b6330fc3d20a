pub mod request;

pub use request::UninstallRequest;

use crate::error::Result;
use crate::model::uninstall::{UninstallScope, UninstallTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallDialog {
    uuid: String,
    device_type: String,
    visible: bool,
    loading: bool,
    active: UninstallScope,
}

impl UninstallDialog {
    pub const TITLE: &'static str = "Uninstall App";

    pub fn new(uuid: &str, device_type: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            device_type: device_type.to_string(),
            visible: false,
            loading: false,
            active: UninstallScope::default(),
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_tab(&self) -> UninstallScope {
        self.active
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.loading = false;
        self.active = UninstallScope::default();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn select_tab(&mut self, key: &str) -> Result<UninstallScope> {
        self.active = key.parse()?;
        tracing::debug!(tab = self.active.tab_key(), "uninstall tab selected");
        Ok(self.active)
    }

    /// Builds the request the active tab forwards on submit. Device ids are
    /// given as bare ids and take the dialog's device type.
    pub fn request(&self, targets: &[&str]) -> Result<UninstallRequest> {
        let targets = targets
            .iter()
            .map(|t| match self.active {
                UninstallScope::Device => UninstallTarget::device(t, &self.device_type),
                _ => UninstallTarget::name(t),
            })
            .collect();
        UninstallRequest::new(&self.uuid, self.active, targets)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/uninstall/tests.rs"]
mod tests;
