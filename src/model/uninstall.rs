use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UninstallScope {
    #[default]
    Device,
    User,
    Role,
    Group,
}

impl UninstallScope {
    pub const TABS: [UninstallScope; 4] = [
        UninstallScope::Device,
        UninstallScope::User,
        UninstallScope::Role,
        UninstallScope::Group,
    ];

    pub fn tab_key(self) -> &'static str {
        match self {
            UninstallScope::Device => "device",
            UninstallScope::User => "user",
            UninstallScope::Role => "role",
            UninstallScope::Group => "group",
        }
    }

    pub fn tab_title(self) -> &'static str {
        match self {
            UninstallScope::Device => "Device",
            UninstallScope::User => "User",
            UninstallScope::Role => "Role",
            UninstallScope::Group => "Group",
        }
    }

    pub fn subscription_type(self) -> &'static str {
        match self {
            UninstallScope::Device => "devices",
            UninstallScope::User => "user",
            UninstallScope::Role => "role",
            UninstallScope::Group => "group",
        }
    }
}

impl fmt::Display for UninstallScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_key())
    }
}

impl FromStr for UninstallScope {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UninstallScope::TABS
            .iter()
            .copied()
            .find(|scope| scope.tab_key() == s || scope.subscription_type() == s)
            .ok_or_else(|| ReportError::UnknownScope(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub device_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UninstallTarget {
    Device(DeviceIdentifier),
    Name(String),
}

impl UninstallTarget {
    pub fn device(id: &str, device_type: &str) -> Self {
        UninstallTarget::Device(DeviceIdentifier {
            id: id.to_string(),
            device_type: device_type.to_string(),
        })
    }

    pub fn name(name: &str) -> Self {
        UninstallTarget::Name(name.to_string())
    }

    pub fn fits(&self, scope: UninstallScope) -> bool {
        matches!(
            (self, scope),
            (UninstallTarget::Device(_), UninstallScope::Device)
                | (
                    UninstallTarget::Name(_),
                    UninstallScope::User | UninstallScope::Role | UninstallScope::Group
                )
        )
    }
}
