use std::io::BufRead;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::filter::FilterKey;
use crate::input::source::open_maybe_gz;
use crate::model::ReportEvent;

pub fn load_events(path: &Path) -> Result<Vec<ReportEvent>> {
    let reader = open_maybe_gz(path)?;
    let events = parse_events(reader)?;
    tracing::info!(path = %path.display(), events = events.len(), "loaded events");
    Ok(events)
}

pub fn parse_events<R: BufRead>(mut reader: R) -> Result<Vec<ReportEvent>> {
    let mut events = Vec::new();
    let mut buf = String::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        events.push(parse_line(line, line_no)?);
    }

    Ok(events)
}

fn parse_line(line: &str, line_no: usize) -> Result<ReportEvent> {
    let (kind, value) = match line.split_once('\t') {
        Some((kind, value)) => (kind.trim(), Some(value.trim())),
        None => (line.trim(), None),
    };
    let value = value.filter(|v| !v.is_empty()).map(str::to_string);

    if kind == "chart" {
        return value
            .map(ReportEvent::ChartSegmentClicked)
            .ok_or_else(|| ReportError::InvalidEvent {
                line: line_no,
                message: "chart event needs a segment label".to_string(),
            });
    }

    let key = kind.parse::<FilterKey>().map_err(|err| ReportError::InvalidEvent {
        line: line_no,
        message: format!("{err} (use status|ownership|chart)"),
    })?;
    match key {
        FilterKey::Status => Ok(ReportEvent::StatusChanged(value)),
        FilterKey::Ownership => Ok(ReportEvent::OwnershipChanged(value)),
        FilterKey::From | FilterKey::To => Err(ReportError::InvalidEvent {
            line: line_no,
            message: ReportError::ImmutableFilterKey(key.as_str()).to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/events.rs"]
mod tests;
