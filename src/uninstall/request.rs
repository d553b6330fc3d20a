use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::model::uninstall::{UninstallScope, UninstallTarget};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UninstallRequest {
    pub uuid: String,
    pub scope: UninstallScope,
    pub targets: Vec<UninstallTarget>,
}

impl UninstallRequest {
    pub fn new(uuid: &str, scope: UninstallScope, targets: Vec<UninstallTarget>) -> Result<Self> {
        if uuid.trim().is_empty() {
            return Err(ReportError::InvalidUninstall(
                "application uuid is empty".to_string(),
            ));
        }
        if targets.is_empty() {
            return Err(ReportError::InvalidUninstall(format!(
                "no {} selected",
                scope.tab_key()
            )));
        }
        if let Some(bad) = targets.iter().find(|t| !t.fits(scope)) {
            return Err(ReportError::InvalidUninstall(format!(
                "target {bad:?} does not belong to the {} tab",
                scope.tab_key()
            )));
        }
        for target in &targets {
            let empty = match target {
                UninstallTarget::Device(d) => d.id.trim().is_empty(),
                UninstallTarget::Name(n) => n.trim().is_empty(),
            };
            if empty {
                return Err(ReportError::InvalidUninstall(format!(
                    "empty {} in target list",
                    scope.tab_key()
                )));
            }
        }

        Ok(Self {
            uuid: uuid.to_string(),
            scope,
            targets,
        })
    }

    pub fn endpoint(&self, config: &ReportConfig) -> String {
        format!(
            "{}/subscription/{}/{}/uninstall",
            config.store_context.trim_end_matches('/'),
            self.uuid,
            self.scope.subscription_type()
        )
    }

    pub fn payload(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.targets)?)
    }
}
