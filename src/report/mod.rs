use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::filter::{DeviceTableQuery, FilterKey, FilterParams, FilterReducer, StatusRule};
use crate::model::{ReportData, ReportEvent};

pub mod json;
pub mod text;

use json::render_params_json;
use text::render_report_text;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentStat {
    pub item: String,
    pub count: u64,
    pub fraction: f64,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct EnrollmentReport {
    config: ReportConfig,
    reducer: FilterReducer,
    data: ReportData,
    params: FilterParams,
}

impl EnrollmentReport {
    pub const TITLE: &'static str = "Summary of enrollments";

    pub fn new(config: ReportConfig, data: ReportData) -> Self {
        let reducer = FilterReducer::from_config(&config);
        let params = reducer.initialize(data.start(), data.end());
        Self {
            config,
            reducer,
            data,
            params,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    pub fn status_rule(&self) -> StatusRule {
        self.reducer.status_rule()
    }

    /// Raw control name path. Unknown names fail with `UnknownFilterKey`.
    pub fn set_filter_named(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        self.reducer.set_filter_by_name(&mut self.params, key, value)?;
        debug!(key, params = ?self.params, "named filter applied");
        Ok(())
    }

    pub fn handle(&mut self, event: &ReportEvent) -> Result<()> {
        match event {
            ReportEvent::StatusChanged(value) => {
                self.reducer
                    .set_filter(&mut self.params, FilterKey::Status, value.as_deref())?;
            }
            ReportEvent::OwnershipChanged(value) => {
                self.reducer
                    .set_filter(&mut self.params, FilterKey::Ownership, value.as_deref())?;
            }
            ReportEvent::ChartSegmentClicked(segment) => {
                self.reducer.apply_chart_selection(&mut self.params, segment);
            }
        }
        debug!(event = event.kind(), params = ?self.params, "report event handled");
        Ok(())
    }

    pub fn handle_all(&mut self, events: &[ReportEvent]) -> Result<()> {
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    pub fn params(&self) -> FilterParams {
        self.reducer.snapshot(&self.params)
    }

    pub fn device_query(&self, offset: u32, limit: Option<u32>) -> DeviceTableQuery {
        DeviceTableQuery::new(
            self.params(),
            offset,
            limit.unwrap_or(self.config.page_size),
        )
    }

    pub fn selected_segment(&self) -> Option<&str> {
        let ownership = self.params.ownership.as_deref()?;
        self.data
            .segments
            .iter()
            .find(|s| s.item == ownership)
            .map(|s| s.item.as_str())
    }

    pub fn segment_stats(&self) -> Vec<SegmentStat> {
        let total = self.data.total();
        let selected = self.selected_segment();
        self.data
            .segments
            .iter()
            .map(|s| SegmentStat {
                item: s.item.clone(),
                count: s.count,
                fraction: if total == 0 {
                    0.0
                } else {
                    s.count as f64 / total as f64
                },
                selected: selected == Some(s.item.as_str()),
            })
            .collect()
    }
}

pub fn format_fraction(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn write_reports(
    report: &EnrollmentReport,
    query: &DeviceTableQuery,
    out_dir: &Path,
) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let params_path = out_dir.join("params.json");
    fs::write(&params_path, render_params_json(report, query)?)?;

    let report_path = out_dir.join("report.txt");
    fs::write(&report_path, render_report_text(report, query))?;

    info!(
        params = %params_path.display(),
        report = %report_path.display(),
        "reports written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
