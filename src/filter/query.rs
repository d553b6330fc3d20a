use serde::Serialize;
use url::form_urlencoded;

use crate::config::ReportConfig;
use crate::filter::{FilterKey, FilterParams};

const DEVICES_REPORT_PATH: &str = "/reports/devices";

pub fn query_pairs(params: &FilterParams) -> Vec<(&'static str, &str)> {
    FilterKey::ALL
        .iter()
        .filter_map(|key| params.get(*key).map(|v| (key.as_str(), v)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceTableQuery {
    pub params: FilterParams,
    pub offset: u32,
    pub limit: u32,
}

impl DeviceTableQuery {
    pub fn new(params: FilterParams, offset: u32, limit: u32) -> Self {
        Self {
            params,
            offset,
            limit,
        }
    }

    pub fn query_string(&self) -> String {
        let offset = self.offset.to_string();
        let limit = self.limit.to_string();
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(query_pairs(&self.params));
        serializer.append_pair("offset", &offset);
        serializer.append_pair("limit", &limit);
        serializer.finish()
    }

    pub fn to_path(&self, config: &ReportConfig) -> String {
        format!(
            "{}{}?{}",
            config.api_context.trim_end_matches('/'),
            DEVICES_REPORT_PATH,
            self.query_string()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/filter/query.rs"]
mod tests;
