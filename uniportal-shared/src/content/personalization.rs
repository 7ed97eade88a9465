//! Persona-driven dashboard and help content.

use crate::models::{Citizenship, Cohort, Faculty, Persona};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

const fn link(label: &'static str, url: &'static str) -> Link {
    Link { label, url }
}

/// "Recommended for you": global links, then faculty, then cohort.
#[must_use]
pub fn recommendations(persona: &Persona) -> Vec<Link> {
    let mut links = vec![link("Campus Map", "/map")];
    match persona.faculty {
        Faculty::Science => {
            links.push(link("Lab Safety Guide", "#"));
            links.push(link("Science Society", "#"));
        }
        Faculty::Arts => {
            links.push(link("Essay Writing Guide", "#"));
            links.push(link("Arts Hub", "#"));
        }
    }
    if persona.cohort == Cohort::Postgrad {
        links.push(link("Thesis Submission", "#"));
    }
    links
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultyNews {
    pub title: &'static str,
    pub items: [&'static str; 2],
}

#[must_use]
pub const fn faculty_news(persona: &Persona) -> FacultyNews {
    match persona.faculty {
        Faculty::Science => FacultyNews {
            title: "Science Faculty News",
            items: ["New Lab Equipment Arriving", "Guest Lecture: Quantum Physics"],
        },
        Faculty::Arts => FacultyNews {
            title: "Arts Faculty News",
            items: ["Gallery Opening Night", "Essay Writing Workshop"],
        },
    }
}

/// "Recommended for You" on the help page.
#[must_use]
pub fn help_recommendations(persona: &Persona) -> Vec<&'static str> {
    let mut topics = Vec::new();
    if persona.citizenship == Citizenship::International {
        topics.push("Visa Renewal Guide");
    }
    if persona.faculty == Faculty::Science {
        topics.push("Lab Safety Protocols");
    }
    topics.push("Academic Adjustment Plan");
    topics
}

#[must_use]
pub fn dashboard_subtitle(persona: &Persona) -> &'static str {
    if persona.is_commencing() {
        "Let's get you settled in."
    } else {
        "Here is your daily overview."
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisaStatus {
    pub summary: &'static str,
    pub visa_expiry: &'static str,
    pub coe_end: &'static str,
}

/// Visa details, present for international students only.
#[must_use]
pub fn visa_status(persona: &Persona) -> Option<VisaStatus> {
    persona.is_international().then_some(VisaStatus {
        summary: "Active (Subclass 500)",
        visa_expiry: "12 Dec 2026",
        coe_end: "30 Nov 2026",
    })
}

pub const COE_EXTENSION_CONFIRMATION: &str =
    "We have logged your request for a CoE extension. An officer will contact you shortly.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

#[must_use]
pub fn quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink {
            id: "l1",
            label: "Library",
            path: "/topic/library",
        },
        QuickLink {
            id: "l2",
            label: "Canvas",
            path: "/topic/canvas",
        },
        QuickLink {
            id: "l3",
            label: "Email",
            path: "/topic/email",
        },
        QuickLink {
            id: "l6",
            label: "Handbook",
            path: "/topic/handbook",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonaUpdate;

    fn labels(links: &[Link]) -> Vec<&'static str> {
        links.iter().map(|l| l.label).collect()
    }

    #[test]
    fn test_recommendations_default() {
        assert_eq!(
            labels(&recommendations(&Persona::default())),
            vec!["Campus Map", "Lab Safety Guide", "Science Society"]
        );
    }

    #[test]
    fn test_recommendations_arts_postgrad() {
        let persona = Persona::default().merged(
            PersonaUpdate::default()
                .faculty(Faculty::Arts)
                .cohort(Cohort::Postgrad),
        );
        assert_eq!(
            labels(&recommendations(&persona)),
            vec!["Campus Map", "Essay Writing Guide", "Arts Hub", "Thesis Submission"]
        );
    }

    #[test]
    fn test_every_persona_gets_campus_map_first() {
        for persona in Persona::all() {
            assert_eq!(recommendations(&persona)[0].url, "/map");
            assert_eq!(help_recommendations(&persona).last(), Some(&"Academic Adjustment Plan"));
        }
    }

    #[test]
    fn test_help_recommendations_international_science() {
        let persona =
            Persona::default().merged(PersonaUpdate::default().citizenship(Citizenship::International));
        assert_eq!(
            help_recommendations(&persona),
            vec!["Visa Renewal Guide", "Lab Safety Protocols", "Academic Adjustment Plan"]
        );
    }

    #[test]
    fn test_visa_status_only_for_international() {
        assert!(visa_status(&Persona::default()).is_none());
        let persona =
            Persona::default().merged(PersonaUpdate::default().citizenship(Citizenship::International));
        assert_eq!(visa_status(&persona).map(|v| v.visa_expiry), Some("12 Dec 2026"));
    }

    #[test]
    fn test_faculty_news_and_subtitle() {
        let arts = Persona::default().merged(PersonaUpdate::default().faculty(Faculty::Arts));
        assert_eq!(faculty_news(&arts).title, "Arts Faculty News");
        assert_eq!(dashboard_subtitle(&arts), "Let's get you settled in.");
    }
}
