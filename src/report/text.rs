use crate::filter::{DeviceTableQuery, FilterKey};
use crate::report::{EnrollmentReport, format_fraction};

pub fn render_report_text(report: &EnrollmentReport, query: &DeviceTableQuery) -> String {
    let mut out = String::new();
    let data = report.data();

    out.push_str(EnrollmentReport::TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(EnrollmentReport::TITLE.len()));
    out.push_str("\n\n");

    out.push_str(&format!("Date range: {} .. {}\n\n", data.start(), data.end()));

    out.push_str("1. Enrollment types\n");
    let stats = report.segment_stats();
    if stats.is_empty() {
        out.push_str("No chart data.\n");
    }
    for stat in &stats {
        let marker = if stat.selected { "*" } else { " " };
        out.push_str(&format!(
            "{} {}: {} ({})\n",
            marker,
            stat.item,
            stat.count,
            format_fraction(stat.fraction)
        ));
    }
    out.push_str(&format!("Total: {}\n\n", data.total()));

    out.push_str("2. Active filters\n");
    for key in query.params.active_keys() {
        if let Some(value) = query.params.get(key) {
            out.push_str(&format!("{}: {}\n", key, value));
        }
    }
    if !query.params.contains(FilterKey::Ownership) {
        out.push_str("ownership: all\n");
    }
    out.push_str(&format!("Status rule: {}\n\n", report.status_rule()));

    out.push_str("3. Device table\n");
    out.push_str(&format!(
        "Page: offset={}, limit={}\n",
        query.offset, query.limit
    ));
    out.push_str(&format!("Query: {}\n", query.to_path(report.config())));

    out
}
