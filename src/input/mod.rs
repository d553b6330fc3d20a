use std::collections::BTreeSet;
use std::path::Path;

pub mod events;
pub mod source;

use crate::error::{ReportError, Result};
use crate::model::ReportData;
use source::open_maybe_gz;

pub use events::load_events;

pub fn load_report_data(path: &Path) -> Result<ReportData> {
    let reader = open_maybe_gz(path)?;
    let data: ReportData = serde_json::from_reader(reader)?;

    if data.start().trim().is_empty() || data.end().trim().is_empty() {
        return Err(ReportError::InvalidInput(format!(
            "report data {} has an empty duration bound",
            path.display()
        )));
    }

    let mut seen = BTreeSet::new();
    for segment in &data.segments {
        if !seen.insert(segment.item.as_str()) {
            tracing::warn!(
                item = %segment.item,
                "duplicate chart segment in report data; counts are kept as given"
            );
        }
    }

    tracing::info!(
        path = %path.display(),
        from = data.start(),
        to = data.end(),
        segments = data.segments.len(),
        "loaded report data"
    );
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
