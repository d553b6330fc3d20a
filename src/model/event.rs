#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    StatusChanged(Option<String>),
    OwnershipChanged(Option<String>),
    ChartSegmentClicked(String),
}

impl ReportEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ReportEvent::StatusChanged(_) => "status",
            ReportEvent::OwnershipChanged(_) => "ownership",
            ReportEvent::ChartSegmentClicked(_) => "chart",
        }
    }
}
