//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ResourceType
// ---------------------------------------------------------------------------

/// Lodging resource a price applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum ResourceType {
    Room = 0,
    Camping = 1,
}

impl From<i16> for ResourceType {
    fn from(v: i16) -> Self {
        match v {
            1 => ResourceType::Camping,
            _ => ResourceType::Room,
        }
    }
}

impl From<ResourceType> for i16 {
    fn from(r: ResourceType) -> Self {
        r as i16
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceType::Room => "Room",
            ResourceType::Camping => "Camping",
        };
        write!(f, "{}", label)
    }
}
