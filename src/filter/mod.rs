use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

pub mod query;
pub mod reducer;

pub use query::DeviceTableQuery;
pub use reducer::FilterReducer;

pub const OWNERSHIP_ALL: &str = "ALL";

// A field is `Some` only while it constrains the device query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<String>,
}

impl FilterParams {
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::From => Some(self.from.as_str()),
            FilterKey::To => Some(self.to.as_str()),
            FilterKey::Status => self.status.as_deref(),
            FilterKey::Ownership => self.ownership.as_deref(),
        }
    }

    pub fn contains(&self, key: FilterKey) -> bool {
        self.get(key).is_some()
    }

    pub fn active_keys(&self) -> Vec<FilterKey> {
        FilterKey::ALL
            .iter()
            .copied()
            .filter(|key| self.contains(*key))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    From,
    To,
    Status,
    Ownership,
}

impl FilterKey {
    pub const ALL: [FilterKey; 4] = [
        FilterKey::From,
        FilterKey::To,
        FilterKey::Status,
        FilterKey::Ownership,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::From => "from",
            FilterKey::To => "to",
            FilterKey::Status => "status",
            FilterKey::Ownership => "ownership",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from" => Ok(FilterKey::From),
            "to" => Ok(FilterKey::To),
            "status" => Ok(FilterKey::Status),
            "ownership" => Ok(FilterKey::Ownership),
            other => Err(ReportError::UnknownFilterKey(other.to_string())),
        }
    }
}

/// How a truthy `status` value is treated.
///
/// `Retain` stores the value. `DropTruthy` reproduces the console's shipped
/// handler, which assigns the value and then deletes it again, so `status`
/// never survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusRule {
    #[default]
    Retain,
    DropTruthy,
}

impl StatusRule {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusRule::Retain => "retain",
            StatusRule::DropTruthy => "drop-truthy",
        }
    }
}

impl fmt::Display for StatusRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusRule {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retain" => Ok(StatusRule::Retain),
            "drop-truthy" => Ok(StatusRule::DropTruthy),
            other => Err(ReportError::UnknownStatusRule(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/filter/tests.rs"]
mod tests;
