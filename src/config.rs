use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::StatusRule;
use crate::input::source::open_maybe_gz;

pub const DEFAULT_API_CONTEXT: &str = "/entgra-ui/api/device-mgt/v1.0";
pub const DEFAULT_STORE_CONTEXT: &str = "/store/api/application-mgt-store/v1.0";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub api_context: String,
    pub store_context: String,
    pub page_size: u32,
    pub status_rule: StatusRule,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_context: DEFAULT_API_CONTEXT.to_string(),
            store_context: DEFAULT_STORE_CONTEXT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            status_rule: StatusRule::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let reader = open_maybe_gz(path)?;
    let config: ReportConfig = serde_json::from_reader(reader)?;
    tracing::info!(
        path = %path.display(),
        status_rule = %config.status_rule,
        page_size = config.page_size,
        "loaded report config"
    );
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
