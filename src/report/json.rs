use serde::Serialize;

use crate::error::Result;
use crate::filter::{DeviceTableQuery, FilterParams, StatusRule};
use crate::report::{EnrollmentReport, SegmentStat};

#[derive(Debug, Serialize)]
struct ParamsDocument<'a> {
    tool: &'static str,
    version: &'static str,
    status_rule: StatusRule,
    params: &'a FilterParams,
    device_query: QueryDocument,
    segments: Vec<SegmentStat>,
}

#[derive(Debug, Serialize)]
struct QueryDocument {
    path: String,
    offset: u32,
    limit: u32,
}

pub fn render_params_json(report: &EnrollmentReport, query: &DeviceTableQuery) -> Result<String> {
    let doc = ParamsDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status_rule: report.status_rule(),
        params: &query.params,
        device_query: QueryDocument {
            path: query.to_path(report.config()),
            offset: query.offset,
            limit: query.limit,
        },
        segments: report.segment_stats(),
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
