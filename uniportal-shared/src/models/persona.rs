use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Faculty the student is enrolled in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Faculty {
    #[default]
    Science,
    Arts,
}

/// Level of study.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Cohort {
    #[default]
    Undergrad,
    Postgrad,
}

/// Residency status, which drives visa-related content.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Citizenship {
    #[default]
    Domestic,
    International,
}

/// Whether the student is new this year.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// Default, so the onboarding checklist shows on first run.
    #[default]
    Commencing,
    Returning,
}

impl Faculty {
    /// Human readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Science => "Science",
            Self::Arts => "Arts",
        }
    }
}

impl Cohort {
    /// Human readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Undergrad => "Undergraduate",
            Self::Postgrad => "Postgraduate",
        }
    }
}

impl Citizenship {
    /// Human readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::International => "International",
        }
    }
}

impl Status {
    /// Human readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Commencing => "Commencing (New)",
            Self::Returning => "Returning",
        }
    }
}

/// Descriptive facets about the current student. They vary displayed content
/// only; they never grant or deny capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Persona {
    pub faculty: Faculty,
    pub cohort: Cohort,
    pub citizenship: Citizenship,
    pub status: Status,
}

impl Persona {
    /// Merges the facets present in `update`, leaving the others untouched.
    /// Returns `true` when anything changed.
    pub fn apply(&mut self, update: PersonaUpdate) -> bool {
        let before = *self;
        if let Some(faculty) = update.faculty {
            self.faculty = faculty;
        }
        if let Some(cohort) = update.cohort {
            self.cohort = cohort;
        }
        if let Some(citizenship) = update.citizenship {
            self.citizenship = citizenship;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        before != *self
    }

    /// Returns a copy with `update` merged in.
    #[must_use]
    pub fn merged(mut self, update: PersonaUpdate) -> Self {
        self.apply(update);
        self
    }

    /// Every combination of facets; no combination is invalid.
    pub fn all() -> impl Iterator<Item = Persona> {
        Faculty::iter().flat_map(|faculty| {
            Cohort::iter().flat_map(move |cohort| {
                Citizenship::iter().flat_map(move |citizenship| {
                    Status::iter().map(move |status| Persona {
                        faculty,
                        cohort,
                        citizenship,
                        status,
                    })
                })
            })
        })
    }

    #[must_use]
    pub fn is_international(&self) -> bool {
        self.citizenship == Citizenship::International
    }

    #[must_use]
    pub fn is_commencing(&self) -> bool {
        self.status == Status::Commencing
    }
}

/// Partial persona used by [`crate::store::PersonaStore::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaUpdate {
    pub faculty: Option<Faculty>,
    pub cohort: Option<Cohort>,
    pub citizenship: Option<Citizenship>,
    pub status: Option<Status>,
}

impl PersonaUpdate {
    #[must_use]
    pub const fn faculty(mut self, faculty: Faculty) -> Self {
        self.faculty = Some(faculty);
        self
    }

    #[must_use]
    pub const fn cohort(mut self, cohort: Cohort) -> Self {
        self.cohort = Some(cohort);
        self
    }

    #[must_use]
    pub const fn citizenship(mut self, citizenship: Citizenship) -> Self {
        self.citizenship = Some(citizenship);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.faculty.is_none()
            && self.cohort.is_none()
            && self.citizenship.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_case::test_case;

    #[test]
    fn test_default_persona() {
        let persona = Persona::default();
        assert_eq!(persona.faculty, Faculty::Science);
        assert_eq!(persona.cohort, Cohort::Undergrad);
        assert_eq!(persona.citizenship, Citizenship::Domestic);
        assert_eq!(persona.status, Status::Commencing);
        assert!(persona.is_commencing());
        assert!(!persona.is_international());
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        for persona in Persona::all() {
            let mut updated = persona;
            assert!(!updated.apply(PersonaUpdate::default()));
            assert_eq!(updated, persona);
        }
    }

    #[test]
    fn test_update_touches_only_given_fields() {
        for persona in Persona::all() {
            let updated = persona.merged(PersonaUpdate::default().citizenship(Citizenship::International));
            assert_eq!(updated.citizenship, Citizenship::International);
            assert_eq!(updated.faculty, persona.faculty);
            assert_eq!(updated.cohort, persona.cohort);
            assert_eq!(updated.status, persona.status);
        }
    }

    #[test]
    fn test_apply_reports_change() {
        let mut persona = Persona::default();
        assert!(persona.apply(PersonaUpdate::default().faculty(Faculty::Arts)));
        assert!(!persona.apply(PersonaUpdate::default().faculty(Faculty::Arts)));
    }

    #[test]
    fn test_all_personas_are_distinct() {
        let all: std::collections::HashSet<_> = Persona::all().collect();
        assert_eq!(all.len(), 16);
    }

    #[test_case("science", Faculty::Science)]
    #[test_case("arts", Faculty::Arts)]
    fn test_faculty_parses(value: &str, expected: Faculty) {
        assert_eq!(Faculty::from_str(value).unwrap(), expected);
        assert_eq!(expected.as_ref(), value);
    }

    #[test_case("undergrad", Cohort::Undergrad)]
    #[test_case("postgrad", Cohort::Postgrad)]
    fn test_cohort_parses(value: &str, expected: Cohort) {
        assert_eq!(Cohort::from_str(value).unwrap(), expected);
    }

    #[test_case("domestic", Citizenship::Domestic)]
    #[test_case("international", Citizenship::International)]
    fn test_citizenship_parses(value: &str, expected: Citizenship) {
        assert_eq!(Citizenship::from_str(value).unwrap(), expected);
    }

    #[test]
    fn test_unknown_facet_value_is_rejected() {
        assert!(Status::from_str("graduated").is_err());
    }

    #[test]
    fn test_update_serde_shape() {
        let update: PersonaUpdate = serde_json::from_str(r#"{ "status": "returning" }"#).unwrap();
        assert_eq!(update, PersonaUpdate::default().status(Status::Returning));
        assert!(!update.is_empty());
        assert!(PersonaUpdate::default().is_empty());
    }
}
