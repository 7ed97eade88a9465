//! Accommodation, student life and IT services content.

use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Housing {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub price: &'static str,
    pub status: &'static str,
}

impl Housing {
    #[must_use]
    pub fn application_confirmation(&self) -> String {
        format!("Application for {} started.", self.name)
    }
}

#[must_use]
pub fn housing() -> Vec<Housing> {
    vec![
        Housing {
            id: "h1",
            name: "University Square",
            kind: "Uni Accommodation",
            price: "$350/wk",
            status: "Open",
        },
        Housing {
            id: "h2",
            name: "International House",
            kind: "College",
            price: "$500/wk",
            status: "Waitlist",
        },
    ]
}

/// Scholarship or bursary the student may apply for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    pub name: &'static str,
    pub description: &'static str,
    pub confirmation: &'static str,
}

#[must_use]
pub fn grants() -> Vec<Grant> {
    vec![
        Grant {
            name: "Academic Excellence Grant",
            description: "For students with H1 average.",
            confirmation: "Grant application submitted.",
        },
        Grant {
            name: "Housing Support Bursary",
            description: "Financial aid for accommodation costs.",
            confirmation: "Bursary application submitted.",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampusEvent {
    pub id: &'static str,
    pub name: &'static str,
    pub date: &'static str,
    pub attending: u32,
}

#[must_use]
pub fn campus_events() -> Vec<CampusEvent> {
    vec![
        CampusEvent {
            id: "ev1",
            name: "O-Week Party",
            date: "Mon 24 Feb",
            attending: 142,
        },
        CampusEvent {
            id: "ev2",
            name: "Career Fair",
            date: "Wed 12 Mar",
            attending: 56,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentoringProgram {
    pub name: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn mentoring_programs() -> Vec<MentoringProgram> {
    vec![
        MentoringProgram {
            name: "Peer Mentoring",
            description: "Connect with senior students.",
        },
        MentoringProgram {
            name: "Career Mentoring",
            description: "Industry professional connections.",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum SystemStatus {
    Operational,
    #[strum(serialize = "Degraded Performance")]
    Degraded,
    Outage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItSystem {
    pub name: &'static str,
    pub status: SystemStatus,
}

/// Number of systems taken down by the simulated outage.
const OUTAGE_SPAN: usize = 2;

pub const OUTAGE_NOTICE: &str =
    "LMS and Email services are currently unavailable. Technicians are investigating.";

#[must_use]
pub fn it_systems() -> Vec<ItSystem> {
    vec![
        ItSystem {
            name: "Canvas LMS",
            status: SystemStatus::Operational,
        },
        ItSystem {
            name: "Student Email",
            status: SystemStatus::Operational,
        },
        ItSystem {
            name: "Eduroam WiFi",
            status: SystemStatus::Degraded,
        },
    ]
}

/// System board as displayed, with the first systems forced to
/// [`SystemStatus::Outage`] while an outage is simulated.
#[must_use]
pub fn system_board(simulate_outage: bool) -> Vec<ItSystem> {
    it_systems()
        .into_iter()
        .enumerate()
        .map(|(index, mut system)| {
            if simulate_outage && index < OUTAGE_SPAN {
                system.status = SystemStatus::Outage;
            }
            system
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Software {
    pub name: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn software_catalogue() -> Vec<Software> {
    vec![
        Software {
            name: "Microsoft Office 365",
            description: "Essential productivity suite.",
        },
        Software {
            name: "MATLAB",
            description: "For Science & Engineering students.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(board: &[ItSystem]) -> Vec<SystemStatus> {
        board.iter().map(|s| s.status).collect()
    }

    #[test]
    fn test_board_without_outage() {
        assert_eq!(
            statuses(&system_board(false)),
            vec![
                SystemStatus::Operational,
                SystemStatus::Operational,
                SystemStatus::Degraded
            ]
        );
    }

    #[test]
    fn test_simulated_outage_hits_first_two() {
        assert_eq!(
            statuses(&system_board(true)),
            vec![
                SystemStatus::Outage,
                SystemStatus::Outage,
                SystemStatus::Degraded
            ]
        );
        assert_eq!(SystemStatus::Degraded.to_string(), "Degraded Performance");
    }

    #[test]
    fn test_housing_confirmation() {
        assert_eq!(
            housing()[0].application_confirmation(),
            "Application for University Square started."
        );
    }
}
