use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportData {
    pub duration: [String; 2],
    #[serde(default)]
    pub segments: Vec<ChartSegment>,
}

impl ReportData {
    pub fn start(&self) -> &str {
        &self.duration[0]
    }

    pub fn end(&self) -> &str {
        &self.duration[1]
    }

    pub fn total(&self) -> u64 {
        self.segments.iter().map(|s| s.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub item: String,
    pub count: u64,
}
