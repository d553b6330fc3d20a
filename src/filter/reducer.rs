use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::filter::{FilterKey, FilterParams, OWNERSHIP_ALL, StatusRule};

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterReducer {
    status_rule: StatusRule,
}

impl FilterReducer {
    pub fn new(status_rule: StatusRule) -> Self {
        Self { status_rule }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.status_rule)
    }

    pub fn status_rule(&self) -> StatusRule {
        self.status_rule
    }

    pub fn initialize(&self, from: &str, to: &str) -> FilterParams {
        FilterParams {
            from: from.to_string(),
            to: to.to_string(),
            status: None,
            ownership: None,
        }
    }

    pub fn set_filter<'p>(
        &self,
        params: &'p mut FilterParams,
        key: FilterKey,
        value: Option<&str>,
    ) -> Result<&'p mut FilterParams> {
        match key {
            FilterKey::Status => {
                params.status = match (value, self.status_rule) {
                    (None, _) | (Some(""), _) => None,
                    (Some(_), StatusRule::DropTruthy) => None,
                    (Some(v), StatusRule::Retain) => Some(v.to_string()),
                };
            }
            FilterKey::Ownership => set_ownership(params, value),
            FilterKey::From | FilterKey::To => {
                return Err(ReportError::ImmutableFilterKey(key.as_str()));
            }
        }
        debug!(
            key = key.as_str(),
            value = value.unwrap_or(""),
            present = params.contains(key),
            "filter updated"
        );
        Ok(params)
    }

    pub fn set_filter_by_name<'p>(
        &self,
        params: &'p mut FilterParams,
        key: &str,
        value: Option<&str>,
    ) -> Result<&'p mut FilterParams> {
        let key: FilterKey = key.parse()?;
        self.set_filter(params, key, value)
    }

    pub fn apply_chart_selection<'p>(
        &self,
        params: &'p mut FilterParams,
        segment: &str,
    ) -> &'p mut FilterParams {
        set_ownership(params, Some(segment));
        debug!(segment, "chart segment selected");
        params
    }

    pub fn snapshot(&self, params: &FilterParams) -> FilterParams {
        params.clone()
    }
}

fn set_ownership(params: &mut FilterParams, value: Option<&str>) {
    params.ownership = match value {
        None | Some(OWNERSHIP_ALL) => None,
        Some(v) => Some(v.to_string()),
    };
}

#[cfg(test)]
#[path = "../../tests/src_inline/filter/reducer.rs"]
mod tests;
