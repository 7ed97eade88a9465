//! "Find Me" on the campus map.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateStatus {
    #[default]
    Idle,
    Locating,
    Found,
    /// The host refused or failed the position request.
    Denied,
}

impl LocateStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Find Me",
            Self::Locating => "Locating...",
            Self::Found => "Within 10m of Library",
            Self::Denied => "Location access denied",
        }
    }

    /// Status once the host answers.
    #[must_use]
    pub const fn resolve(granted: bool) -> Self {
        if granted { Self::Found } else { Self::Denied }
    }
}

/// Simulated marker on the placeholder map, positioned in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapMarker {
    pub label: &'static str,
    pub top: u8,
    pub left: u8,
}

pub const MARKERS: [MapMarker; 2] = [
    MapMarker {
        label: "Lib",
        top: 40,
        left: 30,
    },
    MapMarker {
        label: "Gym",
        top: 60,
        left: 70,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(LocateStatus::default().label(), "Find Me");
        assert_eq!(LocateStatus::Locating.label(), "Locating...");
        assert_eq!(LocateStatus::resolve(true).label(), "Within 10m of Library");
        assert_eq!(LocateStatus::resolve(false).label(), "Location access denied");
    }
}
